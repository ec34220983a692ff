use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler that lives for the rest of the page.
pub fn add_click_listener(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) -> Result<(), wasm_bindgen::JsValue> {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once the document is parsed; immediately if it already is.
pub fn on_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != crate::constants::READY_STATE_LOADING {
        f();
        return;
    }
    let closure = Closure::<dyn FnMut()>::once(f);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn query_all(document: &web::Document, selector: &str) -> Result<Vec<web::Element>, wasm_bindgen::JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect())
}

/// Navigation target of a trigger element. Anchors report the resolved
/// absolute URL; other elements fall back to a raw `href` attribute.
pub fn link_target(el: &web::Element) -> Option<String> {
    if let Some(a) = el.dyn_ref::<web::HtmlAnchorElement>() {
        let href = a.href();
        if !href.is_empty() {
            return Some(href);
        }
    }
    el.get_attribute("href").filter(|h| !h.trim().is_empty())
}
