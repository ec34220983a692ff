// In-memory stand-ins for the DOM overlay, the document and the network.
#![allow(dead_code)]

use futures::channel::oneshot;
use popup_core::{
    FetchError, FetchFuture, FetchResponse, Fetcher, Fragment, OverlayHost, OverlaySurface,
    Visibility,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
pub struct FakeOverlay {
    pub style: RefCell<String>,
    pub content: RefCell<String>,
    pub writes: Cell<usize>,
}

impl FakeOverlay {
    pub fn with(style: &str, content: &str) -> Self {
        Self {
            style: RefCell::new(style.to_owned()),
            content: RefCell::new(content.to_owned()),
            writes: Cell::new(0),
        }
    }

    pub fn style(&self) -> String {
        self.style.borrow().clone()
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }
}

impl OverlaySurface for FakeOverlay {
    fn visibility(&self) -> String {
        self.style.borrow().clone()
    }

    fn set_visibility(&self, visibility: Visibility) {
        *self.style.borrow_mut() = visibility.as_str().to_owned();
        self.writes.set(self.writes.get() + 1);
    }

    fn replace_content(&self, fragment: &Fragment) {
        *self.content.borrow_mut() = fragment.as_str().to_owned();
        self.writes.set(self.writes.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeDocument {
    pub elements: HashMap<String, Rc<FakeOverlay>>,
}

impl FakeDocument {
    pub fn with_overlay(id: &str, overlay: FakeOverlay) -> (Self, Rc<FakeOverlay>) {
        let overlay = Rc::new(overlay);
        let mut doc = Self::default();
        doc.elements.insert(id.to_owned(), overlay.clone());
        (doc, overlay)
    }
}

impl OverlayHost for FakeDocument {
    type Overlay = Rc<FakeOverlay>;

    fn find_overlay(&self, id: &str) -> Option<Self::Overlay> {
        self.elements.get(id).cloned()
    }
}

pub enum Reply {
    Now(Result<FetchResponse, FetchError>),
    Later(oneshot::Receiver<Result<FetchResponse, FetchError>>),
    Never,
}

/// Answers each URL once with a pre-arranged reply. Unknown URLs fail.
#[derive(Default)]
pub struct ScriptedFetcher {
    replies: RefCell<HashMap<String, Reply>>,
    pub requests: RefCell<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn reply(self, url: &str, reply: Reply) -> Self {
        self.replies.borrow_mut().insert(url.to_owned(), reply);
        self
    }

    /// Reply for `url` that resolves when the returned sender fires.
    pub fn gated(self, url: &str) -> (Self, oneshot::Sender<Result<FetchResponse, FetchError>>) {
        let (tx, rx) = oneshot::channel();
        (self.reply(url, Reply::Later(rx)), tx)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for ScriptedFetcher {
    fn get(&self, url: &str) -> FetchFuture<'_> {
        self.requests.borrow_mut().push(url.to_owned());
        let reply = self.replies.borrow_mut().remove(url);
        let url = url.to_owned();
        Box::pin(async move {
            match reply {
                Some(Reply::Now(result)) => result,
                Some(Reply::Later(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchError::Network("sender dropped".into()))),
                Some(Reply::Never) => futures::future::pending().await,
                None => Err(FetchError::Network(format!("no route to {}", url))),
            }
        })
    }
}
