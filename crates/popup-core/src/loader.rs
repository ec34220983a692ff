//! Fetch-and-show for popup links.
//!
//! Every `load` takes a generation ticket before it suspends. Only the load
//! that still holds the current ticket when its response arrives may touch
//! the overlay, so the most recently started request always wins.

use crate::error::PopupError;
use crate::fetch::Fetcher;
use crate::fragment::Fragment;
use crate::overlay::{self, OverlaySurface};
use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Content replaced and overlay visible.
    Shown,
    /// A newer load, cancel or dismiss superseded this one; overlay untouched.
    Stale { ticket: u64, current: u64 },
}

impl LoadOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadOutcome::Shown => "shown",
            LoadOutcome::Stale { .. } => "stale",
        }
    }
}

pub struct PopupLoader<O, F> {
    overlay: O,
    fetcher: F,
    generation: Cell<u64>,
}

impl<O: OverlaySurface, F: Fetcher> PopupLoader<O, F> {
    pub fn new(overlay: O, fetcher: F) -> Self {
        Self {
            overlay,
            fetcher,
            generation: Cell::new(0),
        }
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    fn next_ticket(&self) -> u64 {
        let ticket = self.generation.get().wrapping_add(1);
        self.generation.set(ticket);
        ticket
    }

    /// Fetch `url` and present the body in the overlay.
    ///
    /// Transport failures and non-success statuses are returned as errors and
    /// leave the overlay as it was. There is no timeout and no retry; a fetch
    /// that never settles keeps this future pending.
    pub async fn load(&self, url: &str) -> Result<LoadOutcome, PopupError> {
        let ticket = self.next_ticket();
        log::debug!("[popup] load #{} {}", ticket, url);

        let result = self.fetcher.get(url).await;

        let current = self.generation.get();
        if ticket != current {
            log::debug!("[popup] discard #{} (current #{}) {}", ticket, current, url);
            return Ok(LoadOutcome::Stale { ticket, current });
        }

        let response = result.map_err(|source| PopupError::Fetch {
            url: url.to_owned(),
            source,
        })?;
        if !response.is_success() {
            return Err(PopupError::Status {
                url: url.to_owned(),
                status: response.status,
            });
        }

        self.overlay.replace_content(&Fragment::from(response.body));
        if !overlay::is_visible(&self.overlay) {
            overlay::toggle(&self.overlay);
        }
        log::info!("[popup] shown {}", url);
        Ok(LoadOutcome::Shown)
    }

    /// Invalidate in-flight loads without touching the overlay.
    pub fn cancel_pending(&self) {
        let ticket = self.next_ticket();
        log::debug!("[popup] cancel pending (now #{})", ticket);
    }

    /// Hide the overlay and invalidate in-flight loads.
    pub fn dismiss(&self) {
        self.cancel_pending();
        overlay::hide(&self.overlay);
    }
}
