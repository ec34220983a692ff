//! Overlay abstraction and the visibility toggle.
//!
//! The overlay is reached through a handle instead of a global lookup so the
//! same logic drives a real DOM element in the browser and an in-memory fake
//! in host tests.

use crate::error::PopupError;
use crate::fragment::Fragment;
use crate::visibility::Visibility;
use std::rc::Rc;

/// Handle to the element that presents popup content.
///
/// Methods take `&self`; DOM handles are shared references and fakes use
/// interior mutability.
pub trait OverlaySurface {
    /// Raw CSS `visibility` value, empty when unset.
    fn visibility(&self) -> String;
    fn set_visibility(&self, visibility: Visibility);
    /// Discard the current children and insert `fragment` in their place.
    fn replace_content(&self, fragment: &Fragment);
}

impl<T: OverlaySurface + ?Sized> OverlaySurface for &T {
    fn visibility(&self) -> String {
        (**self).visibility()
    }
    fn set_visibility(&self, visibility: Visibility) {
        (**self).set_visibility(visibility)
    }
    fn replace_content(&self, fragment: &Fragment) {
        (**self).replace_content(fragment)
    }
}

impl<T: OverlaySurface + ?Sized> OverlaySurface for Rc<T> {
    fn visibility(&self) -> String {
        (**self).visibility()
    }
    fn set_visibility(&self, visibility: Visibility) {
        (**self).set_visibility(visibility)
    }
    fn replace_content(&self, fragment: &Fragment) {
        (**self).replace_content(fragment)
    }
}

/// Source of overlay handles, typically the page document.
pub trait OverlayHost {
    type Overlay: OverlaySurface;

    fn find_overlay(&self, id: &str) -> Option<Self::Overlay>;
}

#[inline]
pub fn is_visible<O: OverlaySurface + ?Sized>(overlay: &O) -> bool {
    Visibility::from_style(&overlay.visibility()).is_visible()
}

/// Flip the overlay and return the state that was written.
pub fn toggle<O: OverlaySurface + ?Sized>(overlay: &O) -> Visibility {
    let next = Visibility::from_style(&overlay.visibility()).flipped();
    overlay.set_visibility(next);
    next
}

#[inline]
pub fn show<O: OverlaySurface + ?Sized>(overlay: &O) {
    overlay.set_visibility(Visibility::Visible);
}

#[inline]
pub fn hide<O: OverlaySurface + ?Sized>(overlay: &O) {
    overlay.set_visibility(Visibility::Hidden);
}

/// Look the overlay up by id and toggle it. Nothing is mutated when the
/// element is missing.
pub fn toggle_by_id<H: OverlayHost + ?Sized>(host: &H, id: &str) -> Result<Visibility, PopupError> {
    let overlay = host
        .find_overlay(id)
        .ok_or_else(|| PopupError::OverlayMissing { id: id.to_owned() })?;
    let next = toggle(&overlay);
    log::debug!("[overlay] #{} -> {}", id, next);
    Ok(next)
}
