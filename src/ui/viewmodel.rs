//! View model types representing renderable UI state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by a renderer. They contain no
//! business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use searchbox::ui::viewmodel::{ViewModel, ViewStatus};
//!
//! let vm = ViewModel {
//!     status: ViewStatus::Idle,
//!     header: "Type to search apps".to_string(),
//!     query: String::new(),
//!     show_clear_button: false,
//!     rows: vec![],
//!     selected_index: 0,
//!     total: 0,
//! };
//! assert!(vm.rows.is_empty());
//! ```

use serde::Serialize;

/// What the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    /// Nothing typed yet and nothing loaded.
    Idle,
    /// The application list is being loaded.
    Loading,
    /// Loaded, but no application matches the query.
    Empty,
    /// At least one application matches.
    Results,
    /// The session is closed.
    Closed,
}

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub status: ViewStatus,

    /// Header line, including the result count when results are shown.
    pub header: String,

    /// Current query text as typed.
    pub query: String,

    /// Whether the clear-query button is visible (non-blank query).
    pub show_clear_button: bool,

    /// Visible window of the filtered view.
    pub rows: Vec<DisplayRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    /// Number of items in the filtered view.
    pub total: usize,
}

/// One row of the result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    /// One-based position within the filtered view.
    pub position: usize,
    pub name: String,
    pub identifier: String,
    pub icon: String,
    pub is_selected: bool,
}
