use crate::constants::HTTP_NOT_MODIFIED;
use crate::error::FetchError;
use std::future::Future;
use std::pin::Pin;

/// Status and text body of a completed GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// 2xx or 304.
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status) || self.status == HTTP_NOT_MODIFIED
    }
}

/// Futures here are not `Send`: the browser runs everything on one thread.
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<FetchResponse, FetchError>> + 'a>>;

pub trait Fetcher {
    fn get(&self, url: &str) -> FetchFuture<'_>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn get(&self, url: &str) -> FetchFuture<'_> {
        (**self).get(url)
    }
}

impl<T: Fetcher + ?Sized> Fetcher for std::rc::Rc<T> {
    fn get(&self, url: &str) -> FetchFuture<'_> {
        (**self).get(url)
    }
}
