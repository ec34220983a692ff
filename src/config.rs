use crate::constants::CONFIG_ATTR_PREFIX;
use popup_core::{PopupConfig, CONFIG_KEYS};
use web_sys as web;

/// Defaults overridden by `data-popup-*` attributes on `<body>`. Bad values
/// are logged and skipped.
pub fn load_config(document: &web::Document) -> PopupConfig {
    let mut cfg = PopupConfig::default();
    let Some(body) = document.body() else {
        return cfg;
    };
    for key in CONFIG_KEYS {
        let attr = format!("{}{}", CONFIG_ATTR_PREFIX, key);
        if let Some(value) = body.get_attribute(&attr) {
            if let Err(e) = cfg.apply(key, &value) {
                log::warn!("[config] {}", e);
            }
        }
    }
    cfg
}
