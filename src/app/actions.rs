//! Actions representing side effects requested by the event handler.
//!
//! The event handler never performs side effects itself. It returns a
//! `Vec<Action>`; [`SearchSession`](crate::app::SearchSession) executes the
//! loader actions and hands the rest to the front-end.
//!
//! # Example
//!
//! ```rust
//! use searchbox::app::Action;
//!
//! let action = Action::Launch {
//!     identifier: "org.gnome.Calculator".to_string(),
//!     name: "Calculator".to_string(),
//! };
//! assert!(action.is_outward());
//! assert!(!Action::StartLoad.is_outward());
//! ```

/// Commands emitted by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start the one-shot application enumeration.
    StartLoad,

    /// Cancel the enumeration in flight.
    CancelLoad,

    /// Launch the selected application. Executed by the front-end.
    Launch {
        /// Identifier of the application to start.
        identifier: String,
        /// Display name, for feedback when launching fails.
        name: String,
    },

    /// Dismiss the search UI. Executed by the front-end.
    Close,
}

impl Action {
    /// Returns whether the action is for the front-end rather than the session.
    #[must_use]
    pub const fn is_outward(&self) -> bool {
        matches!(self, Self::Launch { .. } | Self::Close)
    }
}
