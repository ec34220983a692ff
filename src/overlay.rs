use popup_core::{Fragment, OverlayHost, OverlaySurface, Visibility};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The overlay element as seen by `popup_core`.
#[derive(Clone)]
pub struct DomOverlay {
    element: web::HtmlElement,
    keep_scripts: bool,
}

impl DomOverlay {
    pub fn new(element: web::HtmlElement, keep_scripts: bool) -> Self {
        Self {
            element,
            keep_scripts,
        }
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.element.is_connected()
    }

    // Parse through a <template> so the markup is inert until inserted.
    fn parse(&self, html: &str) -> Option<web::DocumentFragment> {
        let document = self.element.owner_document()?;
        let template = document
            .create_element("template")
            .ok()?
            .dyn_into::<web::HtmlTemplateElement>()
            .ok()?;
        template.set_inner_html(html);
        let content = template.content();
        if !self.keep_scripts {
            strip_scripts(&content);
        }
        Some(content)
    }
}

fn strip_scripts(content: &web::DocumentFragment) {
    if let Ok(scripts) = content.query_selector_all("script") {
        for i in 0..scripts.length() {
            if let Some(node) = scripts.item(i) {
                if let Some(parent) = node.parent_node() {
                    _ = parent.remove_child(&node);
                }
            }
        }
    }
}

impl OverlaySurface for DomOverlay {
    fn visibility(&self) -> String {
        self.element
            .style()
            .get_property_value("visibility")
            .unwrap_or_default()
    }

    fn set_visibility(&self, visibility: Visibility) {
        if let Err(e) = self.element.style().set_property("visibility", visibility.as_str()) {
            log::warn!("[overlay] set visibility failed: {:?}", e);
        }
    }

    fn replace_content(&self, fragment: &Fragment) {
        match self.parse(fragment.as_str()) {
            Some(content) => {
                self.element.set_inner_html("");
                if let Err(e) = self.element.append_child(&content) {
                    log::warn!("[overlay] insert failed: {:?}", e);
                }
            }
            // no owner document to parse with; let innerHTML deal with it
            None => self.element.set_inner_html(fragment.as_str()),
        }
    }
}

pub struct DomOverlayHost {
    document: web::Document,
    keep_scripts: bool,
}

impl DomOverlayHost {
    pub fn new(document: web::Document, keep_scripts: bool) -> Self {
        Self {
            document,
            keep_scripts,
        }
    }
}

impl OverlayHost for DomOverlayHost {
    type Overlay = DomOverlay;

    fn find_overlay(&self, id: &str) -> Option<DomOverlay> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(|el| DomOverlay::new(el, self.keep_scripts))
    }
}
