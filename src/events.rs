use crate::constants::PRIMARY_BUTTON;
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

// Modified or non-primary clicks (new tab, new window) keep browser behaviour
#[inline]
fn is_plain_click(ev: &web::MouseEvent) -> bool {
    ev.button() == PRIMARY_BUTTON && !(ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key())
}

/// Open the link target of every element matching `selector` in the overlay
/// instead of navigating. Returns the number of elements wired.
pub fn wire_popup_links(document: &web::Document, selector: &str) -> anyhow::Result<usize> {
    let links = dom::query_all(document, selector).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for link in &links {
        dom::add_click_listener(link, |ev| {
            if !is_plain_click(&ev) {
                return;
            }
            let Some(el) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
            else {
                return;
            };
            let Some(url) = dom::link_target(&el) else {
                log::warn!("[popup] trigger without link target");
                return;
            };
            ev.prevent_default();
            spawn_local(async move {
                // errors are logged inside open_popup
                _ = crate::open_popup(&url).await;
            });
        })
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(links.len())
}

/// Toggle the overlay when any element matching `selector` is clicked.
pub fn wire_overlay_toggles(document: &web::Document, selector: &str) -> anyhow::Result<usize> {
    let toggles = dom::query_all(document, selector).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for el in &toggles {
        dom::add_click_listener(el, |ev| {
            ev.prevent_default();
            _ = crate::toggle_overlay();
        })
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(toggles.len())
}
