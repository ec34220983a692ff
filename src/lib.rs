#![cfg(target_arch = "wasm32")]
use popup_core::{
    toggle_by_id, LoadOutcome, OverlayHost, PopupConfig, PopupError, PopupLoader, Visibility,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod fetch;
mod overlay;

use fetch::WebFetcher;
use overlay::{DomOverlay, DomOverlayHost};

type Loader = PopupLoader<DomOverlay, WebFetcher>;

thread_local! {
    static CONFIG: RefCell<PopupConfig> = RefCell::new(PopupConfig::default());
    static LOADER: RefCell<Option<Rc<Loader>>> = RefCell::new(None);
}

fn current_config() -> PopupConfig {
    CONFIG.with(|c| c.borrow().clone())
}

fn overlay_host(cfg: &PopupConfig) -> Result<DomOverlayHost, PopupError> {
    let document = dom::window_document().ok_or_else(|| PopupError::OverlayMissing {
        id: cfg.overlay_id.clone(),
    })?;
    Ok(DomOverlayHost::new(document, cfg.keep_scripts))
}

// Reuse the loader while its overlay is still in the page so the generation
// counter spans every popup link.
fn loader() -> Result<Rc<Loader>, PopupError> {
    let cached = LOADER.with(|slot| slot.borrow().clone());
    if let Some(loader) = &cached {
        if loader.overlay().is_connected() {
            return Ok(loader.clone());
        }
        loader.cancel_pending();
    }

    let cfg = current_config();
    let overlay = overlay_host(&cfg)?
        .find_overlay(&cfg.overlay_id)
        .ok_or_else(|| PopupError::OverlayMissing {
            id: cfg.overlay_id.clone(),
        })?;
    let loader = Rc::new(PopupLoader::new(overlay, WebFetcher::new(cfg.ajax_header)));
    LOADER.with(|slot| *slot.borrow_mut() = Some(loader.clone()));
    Ok(loader)
}

pub(crate) fn toggle_overlay() -> Result<Visibility, PopupError> {
    let cfg = current_config();
    let next = toggle_by_id(&overlay_host(&cfg)?, &cfg.overlay_id).map_err(|e| {
        log::warn!("[overlay] {}", e);
        e
    })?;
    // closing the overlay abandons whatever was on its way into it
    if next == Visibility::Hidden {
        if let Some(loader) = LOADER.with(|slot| slot.borrow().clone()) {
            loader.cancel_pending();
        }
    }
    Ok(next)
}

pub(crate) async fn open_popup(url: &str) -> Result<LoadOutcome, PopupError> {
    let loader = loader().map_err(|e| {
        log::warn!("[popup] {}", e);
        e
    })?;
    let outcome = loader.load(url).await;
    if let Err(e) = &outcome {
        log::warn!("[popup] {}", e);
    }
    outcome
}

fn to_js(e: PopupError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Toggle the overlay. Throws when the overlay element is missing.
#[wasm_bindgen(js_name = overlay)]
pub fn overlay_toggle() -> Result<(), JsValue> {
    toggle_overlay().map(|_| ()).map_err(to_js)
}

/// Load `element`'s link target into the overlay and show it.
///
/// Resolves to `"shown"`, or `"stale"` when a later popup superseded this
/// one; rejects on missing overlay, network failure or error status.
#[wasm_bindgen(js_name = AddPopUp)]
pub fn add_pop_up(element: &web::Element) -> js_sys::Promise {
    let url = dom::link_target(element);
    future_to_promise(async move {
        let url = url.ok_or_else(|| JsValue::from(js_sys::Error::new("element has no link target")))?;
        open_popup(&url)
            .await
            .map(|outcome| JsValue::from_str(outcome.as_str()))
            .map_err(to_js)
    })
}

/// Hide the overlay and drop any popup still loading.
#[wasm_bindgen(js_name = dismissPopUp)]
pub fn dismiss_pop_up() -> Result<(), JsValue> {
    loader().map(|l| l.dismiss()).map_err(to_js)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("webapp-popup starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let doc = document.clone();
    dom::on_ready(&document, move || {
        if let Err(e) = init(&doc) {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init(document: &web::Document) -> anyhow::Result<()> {
    let cfg = config::load_config(document);
    CONFIG.with(|c| *c.borrow_mut() = cfg.clone());

    if document.get_element_by_id(&cfg.overlay_id).is_none() {
        log::warn!("[overlay] missing #{}; popups will fail until it exists", cfg.overlay_id);
    }

    let links = events::wire_popup_links(document, &cfg.popup_selector)?;
    let toggles = events::wire_overlay_toggles(document, &cfg.toggle_selector)?;
    log::info!(
        "[init] overlay=#{} popup links={} toggles={}",
        cfg.overlay_id,
        links,
        toggles
    );
    Ok(())
}
