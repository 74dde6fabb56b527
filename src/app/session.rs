//! Async driver for one search session.
//!
//! [`SearchSession`] owns the [`AppState`], the [`Loader`] and the handle of the
//! in-flight load. It feeds events through [`handle_event`], executes the loader
//! actions itself and passes front-end actions (launch, close) back to the caller.
//!
//! # Lifecycle
//!
//! ```text
//! front-end ── dispatch(Event) ──▶ SearchSession ── StartLoad ──▶ Loader (blocking worker)
//!     ▲                                  │                               │
//!     └──── Launch / Close ──────────────┘◀──── wait_for_load() ─────────┘
//! ```
//!
//! Dropping the session cancels an in-flight load.
//!
//! # Example
//!
//! ```rust
//! use searchbox::app::SearchSession;
//! use searchbox::inventory::MemoryInventory;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), searchbox::SearchboxError> {
//! let inventory = MemoryInventory::from_pairs([("Calculator", "com.a.calc"), ("Camera", "com.a.cam")]);
//! let mut session = SearchSession::new(Arc::new(inventory));
//!
//! session.set_query("cam")?;
//! session.wait_for_load().await?;
//!
//! assert_eq!(session.state().count(), 1);
//! # Ok(())
//! # }
//! ```

use super::handler::{handle_event, Event};
use super::{Action, AppState, SessionStatus};
use crate::domain::error::Result;
use crate::inventory::AppInventory;
use crate::loader::{LoadHandle, Loader};
use crate::ui::viewmodel::ViewModel;
use std::sync::Arc;
use tokio_util::sync::{CancellationToken, DropGuard};

/// One search session: from the search UI becoming visible until it is dismissed.
pub struct SearchSession {
    state: AppState,
    loader: Loader,
    pending: Option<LoadHandle>,
    _teardown: DropGuard,
}

impl SearchSession {
    /// Creates a session over an inventory. Nothing is enumerated until the first
    /// non-blank query.
    #[must_use]
    pub fn new(inventory: Arc<dyn AppInventory>) -> Self {
        let cancel = CancellationToken::new();
        Self {
            state: AppState::new(),
            loader: Loader::with_cancellation(inventory, cancel.clone()),
            pending: None,
            _teardown: cancel.drop_guard(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn loader(&self) -> &Loader {
        &self.loader
    }

    /// Returns whether a load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Processes an event and returns `(render, front-end actions)`.
    ///
    /// `StartLoad` and `CancelLoad` are executed here and never returned.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`], and from [`Loader::load`] when the
    /// load cannot be started. In that case the session stays `Uninitialized` and
    /// the next non-blank query tries again.
    pub fn dispatch(&mut self, event: &Event) -> Result<(bool, Vec<Action>)> {
        let (render, actions) = handle_event(&mut self.state, event)?;

        let mut outward = Vec::with_capacity(actions.len());
        for action in actions {
            match action {
                Action::StartLoad => match self.loader.load() {
                    Ok(Some(handle)) => self.pending = Some(handle),
                    Ok(None) => {}
                    Err(e) => {
                        self.state.status = SessionStatus::Uninitialized;
                        return Err(e);
                    }
                },
                Action::CancelLoad => {
                    self.loader.cancel();
                    self.pending = None;
                }
                other => outward.push(other),
            }
        }

        Ok((render, outward))
    }

    /// Replaces the query. Returns whether a re-render is needed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn set_query(&mut self, query: &str) -> Result<bool> {
        self.dispatch(&Event::QueryChanged(query.to_string()))
            .map(|(render, _)| render)
    }

    /// Waits for the in-flight load and applies it together with the pending query.
    ///
    /// Returns `Ok(false)` immediately when no load is in flight. Cancel safe: if
    /// the returned future is dropped before completion, the load stays pending.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub async fn wait_for_load(&mut self) -> Result<bool> {
        let Some(handle) = self.pending.as_mut() else {
            return Ok(false);
        };

        let outcome = handle.await;
        self.pending = None;

        self.dispatch(&Event::LoadFinished(outcome))
            .map(|(render, _)| render)
    }

    /// Tears the session down, cancelling an in-flight load.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn close(&mut self) -> Result<Vec<Action>> {
        self.dispatch(&Event::Close).map(|(_, actions)| actions)
    }

    /// Computes the view model for the current state.
    #[must_use]
    pub fn viewmodel(&self, max_rows: usize) -> ViewModel {
        self.state.compute_viewmodel(max_rows)
    }
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("state", &self.state)
            .field("loader", &self.loader)
            .field("loading", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}
