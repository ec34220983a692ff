use crate::constants::{DEFAULT_OVERLAY_ID, DEFAULT_POPUP_SELECTOR, DEFAULT_TOGGLE_SELECTOR};
use crate::error::PopupError;

/// Keys understood by `PopupConfig::apply`.
pub const CONFIG_KEYS: &[&str] = &[
    "overlay-id",
    "popup-selector",
    "toggle-selector",
    "keep-scripts",
    "ajax-header",
];

/// Page-level settings for the overlay wiring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupConfig {
    pub overlay_id: String,
    pub popup_selector: String,
    pub toggle_selector: String,
    /// Keep `<script>` elements found in loaded fragments.
    pub keep_scripts: bool,
    /// Send `X-Requested-With: XMLHttpRequest` with popup requests.
    pub ajax_header: bool,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            overlay_id: DEFAULT_OVERLAY_ID.to_owned(),
            popup_selector: DEFAULT_POPUP_SELECTOR.to_owned(),
            toggle_selector: DEFAULT_TOGGLE_SELECTOR.to_owned(),
            keep_scripts: false,
            ajax_header: true,
        }
    }
}

impl PopupConfig {
    /// Apply one kebab-case override such as `overlay-id` or `keep-scripts`.
    /// Unknown keys are ignored.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), PopupError> {
        match key {
            "overlay-id" => self.overlay_id = non_empty(key, value)?,
            "popup-selector" => self.popup_selector = non_empty(key, value)?,
            "toggle-selector" => self.toggle_selector = non_empty(key, value)?,
            "keep-scripts" => self.keep_scripts = parse_flag(key, value)?,
            "ajax-header" => self.ajax_header = parse_flag(key, value)?,
            _ => log::debug!("[config] ignoring unknown key {}", key),
        }
        Ok(())
    }

    /// Build from defaults plus overrides. A bad value aborts with the
    /// offending key; earlier overrides are not kept.
    pub fn from_overrides<'a, I>(overrides: I) -> Result<Self, PopupError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut cfg = Self::default();
        for (key, value) in overrides {
            cfg.apply(key, value)?;
        }
        Ok(cfg)
    }
}

fn invalid(key: &str, value: &str) -> PopupError {
    PopupError::Config {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}

fn non_empty(key: &str, value: &str) -> Result<String, PopupError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(invalid(key, value));
    }
    Ok(v.to_owned())
}

fn parse_flag(key: &str, value: &str) -> Result<bool, PopupError> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}
