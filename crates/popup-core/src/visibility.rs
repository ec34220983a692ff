use crate::constants::{VISIBILITY_HIDDEN, VISIBILITY_VISIBLE};
use std::fmt;

/// Two-state view of the overlay's CSS `visibility`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Interpret a raw style value. Only an exact `"visible"` counts as shown;
    /// unset, `"hidden"`, `"collapse"` and anything else read as hidden.
    pub fn from_style(raw: &str) -> Self {
        if raw == VISIBILITY_VISIBLE {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Visible => VISIBILITY_VISIBLE,
            Visibility::Hidden => VISIBILITY_HIDDEN,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_visible_is_visible() {
        assert_eq!(Visibility::from_style("visible"), Visibility::Visible);
        assert_eq!(Visibility::from_style("hidden"), Visibility::Hidden);
        assert_eq!(Visibility::from_style(""), Visibility::Hidden);
        assert_eq!(Visibility::from_style("collapse"), Visibility::Hidden);
        // style values are compared verbatim
        assert_eq!(Visibility::from_style("Visible"), Visibility::Hidden);
        assert_eq!(Visibility::from_style(" visible"), Visibility::Hidden);
    }

    #[test]
    fn flipped_round_trips() {
        assert_eq!(Visibility::Visible.flipped(), Visibility::Hidden);
        assert_eq!(Visibility::Hidden.flipped().flipped(), Visibility::Hidden);
        assert_eq!(Visibility::Visible.to_string(), "visible");
        assert_eq!(Visibility::Hidden.to_string(), "hidden");
    }
}
