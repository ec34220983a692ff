/// Front-end wiring constants. Overlay defaults live in `popup_core::constants`.
// Prefix for configuration attributes on <body>, e.g. data-popup-overlay-id
pub const CONFIG_ATTR_PREFIX: &str = "data-popup-";

// Document.readyState while the parser is still running
pub const READY_STATE_LOADING: &str = "loading";

// Only the primary button opens a popup; others keep browser behaviour
pub const PRIMARY_BUTTON: i16 = 0;
