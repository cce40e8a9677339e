//! Raw-text retrieval bookkeeping for a preview resolution context.
//!
//! A [`TextLoader`] lives as long as the component that renders a preview.
//! It hands out at most one [`LoadTicket`] per content URL, and only
//! applies a result whose ticket is still current and whose
//! [`CancelToken`] has not been cancelled. Tearing the loader down cancels
//! the outstanding ticket, so late responses have no observable effect.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::error::FetchError;
use crate::models::TextState;

/// Shared cancellation flag between a loader and its in-flight request.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Permission to run one fetch and report its result.
#[derive(Clone, Debug)]
pub struct LoadTicket {
    url: String,
    generation: u64,
    token: CancelToken,
}

impl LoadTicket {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Text fetch state for one resolution context.
#[derive(Clone, Debug, Default)]
pub struct TextLoader {
    url: Option<String>,
    generation: u64,
    state: TextState,
    inflight: Option<CancelToken>,
    torn_down: bool,
}

impl TextLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TextState {
        &self.state
    }

    /// Request a fetch of `url`.
    ///
    /// Returns `None` when the same URL is already loading or loaded, or the
    /// context has been torn down. A failed URL may be requested again. A
    /// different URL supersedes (and cancels) any previous request.
    pub fn begin(&mut self, url: &str) -> Option<LoadTicket> {
        if self.torn_down {
            return None;
        }
        if self.url.as_deref() == Some(url) && self.state != TextState::Failed {
            return None;
        }

        self.cancel_inflight();
        self.generation += 1;

        let token = CancelToken::new();
        self.url = Some(url.to_string());
        self.state = TextState::Loading;
        self.inflight = Some(token.clone());

        Some(LoadTicket {
            url: url.to_string(),
            generation: self.generation,
            token,
        })
    }

    /// Apply a fetch result. Returns `false` if the ticket was stale or cancelled.
    pub fn complete(&mut self, ticket: &LoadTicket, result: Result<String, FetchError>) -> bool {
        if ticket.is_cancelled() || ticket.generation != self.generation {
            log::debug!("discarding stale text response for {}", ticket.url);
            return false;
        }

        self.inflight = None;
        self.state = match result {
            Ok(text) => TextState::Loaded(text),
            Err(err) => {
                log::warn!("failed to load text preview from {}: {}", ticket.url, err);
                TextState::Failed
            }
        };
        true
    }

    /// Forget any text; the file no longer needs it.
    pub fn reset(&mut self) {
        self.cancel_inflight();
        self.url = None;
        self.state = TextState::Idle;
    }

    /// End of the resolution context. Nothing is applied afterwards.
    pub fn teardown(&mut self) {
        self.cancel_inflight();
        self.torn_down = true;
    }

    fn cancel_inflight(&mut self) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }
    }
}
