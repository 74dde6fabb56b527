//! One-shot background loader for the application list.
//!
//! Enumerating installed applications walks a system-wide inventory and may take
//! noticeable time, so it runs on a blocking worker thread and never on the thread
//! that handles queries.
//!
//! # Architecture
//!
//! - `messages`: [`LoadReport`] and [`LoadOutcome`], the single completion signal
//! - `task`: The blocking enumeration pass
//!
//! A [`Loader`] starts at most one enumeration in its lifetime. The first call to
//! [`Loader::load`] returns a [`LoadHandle`]; every later call returns `Ok(None)`.
//! The handle is a future that resolves exactly once.
//!
//! # Cancellation
//!
//! Each loader owns a [`CancellationToken`]. Cancelling it stops the enumeration at
//! the next candidate and resolves the handle with [`LoadOutcome::Cancelled`].

pub mod messages;
pub mod task;

pub use messages::{LoadOutcome, LoadReport};
pub use task::{enumerate_items, sort_items};

use crate::domain::error::{Result, SearchboxError};
use crate::inventory::AppInventory;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio_util::sync::CancellationToken;

/// Starts the application enumeration at most once.
pub struct Loader {
    inventory: Arc<dyn AppInventory>,
    started: AtomicBool,
    cancel: CancellationToken,
}

impl Loader {
    /// Creates a loader with its own cancellation token.
    #[must_use]
    pub fn new(inventory: Arc<dyn AppInventory>) -> Self {
        Self::with_cancellation(inventory, CancellationToken::new())
    }

    /// Creates a loader that stops when `cancel` is cancelled.
    #[must_use]
    pub fn with_cancellation(inventory: Arc<dyn AppInventory>, cancel: CancellationToken) -> Self {
        Self {
            inventory,
            started: AtomicBool::new(false),
            cancel,
        }
    }

    /// Returns whether [`Loader::load`] has already started the enumeration.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Cancels an in-flight enumeration.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Starts the enumeration on a blocking worker thread.
    ///
    /// Returns `Ok(None)` if a load was already started, whether it is still in
    /// flight or finished.
    ///
    /// # Errors
    ///
    /// Returns [`SearchboxError::Loader`] when called outside of a Tokio runtime.
    /// The loader is not marked as started in that case.
    pub fn load(&self) -> Result<Option<LoadHandle>> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| SearchboxError::Loader(e.to_string()))?;

        if self
            .started
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("load already started, ignoring");
            return Ok(None);
        }

        let inventory = Arc::clone(&self.inventory);
        let cancel = self.cancel.clone();
        let span = tracing::debug_span!("load_applications");

        let join = runtime.spawn_blocking(move || {
            let _guard = span.entered();
            task::enumerate_items(inventory.as_ref(), &cancel)
        });

        let cancel = self.cancel.clone();
        let completion = join.map(move |result| match result {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() || cancel.is_cancelled() => LoadOutcome::Cancelled,
            Err(e) => {
                tracing::error!(error = %e, "load task failed");
                LoadOutcome::Loaded(LoadReport::empty())
            }
        });

        Ok(Some(LoadHandle {
            completion: completion.boxed(),
        }))
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("started", &self.started)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

/// Completion of a started load.
///
/// Resolves exactly once with the [`LoadOutcome`]. Dropping the handle does not
/// stop the enumeration; cancel the loader for that.
pub struct LoadHandle {
    completion: BoxFuture<'static, LoadOutcome>,
}

impl Future for LoadHandle {
    type Output = LoadOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.completion.poll_unpin(cx)
    }
}

impl std::fmt::Debug for LoadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadHandle").finish_non_exhaustive()
    }
}
