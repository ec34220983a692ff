use thiserror::Error;

/// Transport-level failure reported by a `Fetcher`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("fetch is unavailable: {0}")]
    Unavailable(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("could not read response body: {0}")]
    Body(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopupError {
    #[error("no element with id `{id}` in the document")]
    OverlayMissing { id: String },
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("invalid value `{value}` for `{key}`")]
    Config { key: String, value: String },
}
