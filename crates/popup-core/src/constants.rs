/// Defaults for the overlay wiring. Pages override them through `PopupConfig`.
// Element id of the overlay that receives popup content
pub const DEFAULT_OVERLAY_ID: &str = "overlay";

// Links that open their target inside the overlay
pub const DEFAULT_POPUP_SELECTOR: &str = "a[data-popup]";

// Elements that flip the overlay on click (close buttons, backdrop)
pub const DEFAULT_TOGGLE_SELECTOR: &str = "[data-overlay-toggle]";

// CSS visibility values written by the toggle
pub const VISIBILITY_VISIBLE: &str = "visible";
pub const VISIBILITY_HIDDEN: &str = "hidden";

// Header that lets server views recognise background requests
pub const AJAX_HEADER_NAME: &str = "X-Requested-With";
pub const AJAX_HEADER_VALUE: &str = "XMLHttpRequest";

// Not Modified is accepted alongside 2xx
pub const HTTP_NOT_MODIFIED: u16 = 304;
