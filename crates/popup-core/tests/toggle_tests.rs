mod common;

use common::{FakeDocument, FakeOverlay};
use popup_core::{hide, is_visible, show, toggle, toggle_by_id, PopupError, Visibility};
use std::rc::Rc;

#[test]
fn toggle_shows_from_anything_but_visible() {
    for initial in ["hidden", "", "collapse", "inherit", "VISIBLE", "visible "] {
        let overlay = FakeOverlay::with(initial, "");
        assert_eq!(toggle(&overlay), Visibility::Visible, "initial {:?}", initial);
        assert_eq!(overlay.style(), "visible");
    }
}

#[test]
fn toggle_hides_when_visible() {
    let overlay = FakeOverlay::with("visible", "<p>kept</p>");
    assert_eq!(toggle(&overlay), Visibility::Hidden);
    assert_eq!(overlay.style(), "hidden");
    // content is never touched by the toggle
    assert_eq!(overlay.content(), "<p>kept</p>");
}

#[test]
fn two_toggles_restore_the_original_state() {
    for initial in ["visible", "hidden"] {
        let overlay = FakeOverlay::with(initial, "");
        toggle(&overlay);
        toggle(&overlay);
        assert_eq!(overlay.style(), initial);
    }

    // an unset style normalises to "hidden"
    let overlay = FakeOverlay::default();
    toggle(&overlay);
    toggle(&overlay);
    assert_eq!(overlay.style(), "hidden");
}

#[test]
fn show_and_hide_are_idempotent() {
    let overlay = FakeOverlay::default();
    show(&overlay);
    show(&overlay);
    assert!(is_visible(&overlay));
    hide(&overlay);
    hide(&overlay);
    assert!(!is_visible(&overlay));
    assert_eq!(overlay.style(), "hidden");
}

#[test]
fn toggle_by_id_flips_the_named_element() {
    let (doc, overlay) = FakeDocument::with_overlay("overlay", FakeOverlay::with("hidden", ""));
    assert_eq!(toggle_by_id(&doc, "overlay"), Ok(Visibility::Visible));
    assert_eq!(toggle_by_id(&doc, "overlay"), Ok(Visibility::Hidden));
    assert_eq!(overlay.style(), "hidden");
}

#[test]
fn toggle_by_id_reports_missing_overlay() {
    let (doc, other) = FakeDocument::with_overlay("modal", FakeOverlay::with("hidden", ""));
    let err = toggle_by_id(&doc, "overlay").unwrap_err();
    assert_eq!(
        err,
        PopupError::OverlayMissing {
            id: "overlay".into()
        }
    );
    assert_eq!(err.to_string(), "no element with id `overlay` in the document");
    assert_eq!(other.writes.get(), 0);

    let empty = FakeDocument::default();
    assert!(matches!(
        toggle_by_id(&empty, "overlay"),
        Err(PopupError::OverlayMissing { .. })
    ));
}

#[test]
fn shared_handles_toggle_the_same_element() {
    let overlay = Rc::new(FakeOverlay::default());
    let alias = overlay.clone();
    toggle(&alias);
    assert!(is_visible(&overlay));
    toggle(&&*overlay);
    assert!(!is_visible(&alias));
}
