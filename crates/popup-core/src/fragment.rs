/// HTML snippet destined for the overlay. The markup is not validated here;
/// the DOM parser on the receiving side decides how to treat malformed input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Fragment {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for Fragment {
    fn from(html: &str) -> Self {
        Self(html.to_owned())
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
