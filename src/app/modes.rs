//! Session status state machine.
//!
//! ```text
//!                  non-empty query            load finished
//! Uninitialized ────────────────────▶ Loading ──────────────▶ Ready ◀─┐
//!      │  ▲                              │                     │     │ query
//!      └──┘ empty query                  │ query (pending)     └─────┘
//!                                        └──┐
//!                                           ▼
//!                                        Loading
//! ```
//!
//! Any status moves to `Closed` when the session is torn down.

use serde::Serialize;

/// Lifecycle status of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// No load has been issued; nothing is shown until the user types.
    #[default]
    Uninitialized,

    /// The one-shot enumeration is in flight. Queries are recorded but not applied.
    Loading,

    /// The full list is available and every query change refilters it.
    Ready,

    /// The session was torn down. Further events are ignored.
    Closed,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}
