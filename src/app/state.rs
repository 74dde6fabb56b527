//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the state container for one search session:
//! its status, the query as typed, the search index once the full list is
//! available, and the selection cursor.
//!
//! # Pending queries
//!
//! While the list is loading, the query keeps changing but nothing is filtered.
//! [`AppState::install`] applies whatever query is current at completion time in
//! the same step that installs the list, so an unfiltered list is never shown
//! after the user has typed.
//!
//! # Example
//!
//! ```rust
//! use searchbox::app::{AppState, SessionStatus};
//! use searchbox::{AppItem, Icon};
//!
//! let mut state = AppState::new();
//! state.query = "cam".to_string();
//! state.status = SessionStatus::Loading;
//! state.install(vec![
//!     AppItem::new("Calculator", "com.a.calc", Icon::generic()),
//!     AppItem::new("Camera", "com.a.cam", Icon::generic()),
//! ]);
//! assert_eq!(state.count(), 1);
//! ```

use super::index::{normalize_query, FilteredView, SearchIndex};
use super::modes::SessionStatus;
use crate::domain::AppItem;
use crate::ui::viewmodel::{DisplayRow, ViewModel, ViewStatus};
use std::sync::Arc;

/// State of one search session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current lifecycle status.
    pub status: SessionStatus,

    /// Current query string as typed (untrimmed).
    ///
    /// Updated on every query change, including while loading.
    pub query: String,

    /// Full list and filtered view. `Some` once the status is `Ready`.
    pub index: Option<SearchIndex>,

    /// Zero-based index of the selected item within the filtered view.
    ///
    /// Clamped whenever the view is rebuilt. Wraps around during navigation.
    pub selected_index: usize,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current filtered view, if the list is loaded.
    #[must_use]
    pub fn view(&self) -> Option<&FilteredView> {
        self.index.as_ref().map(SearchIndex::view)
    }

    /// Number of items in the filtered view; zero before the list is loaded.
    #[must_use]
    pub fn count(&self) -> usize {
        self.index.as_ref().map_or(0, SearchIndex::count)
    }

    /// Installs the loaded full list, applies the current query and becomes `Ready`.
    pub fn install(&mut self, items: impl Into<Arc<[AppItem]>>) {
        let mut index = SearchIndex::new(items);
        index.set_query(&self.query);
        self.index = Some(index);
        self.status = SessionStatus::Ready;
        self.clamp_selection();

        tracing::debug!(
            total = self.index.as_ref().map_or(0, SearchIndex::full_len),
            filtered = self.count(),
            "full list installed"
        );
    }

    /// Refilters the loaded list with the current query. No-op before loading.
    pub fn apply_query(&mut self) {
        if let Some(index) = self.index.as_mut() {
            index.set_query(&self.query);
        }
        self.clamp_selection();
    }

    /// Moves selection down by one position, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves selection up by one position, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&AppItem> {
        self.view().and_then(|view| view.get(self.selected_index))
    }

    fn clamp_selection(&mut self) {
        let count = self.count();
        if count == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(count - 1);
        }
    }

    /// Computes a renderable view model showing at most `max_rows` rows.
    ///
    /// # Windowing
    ///
    /// The window is centered on the selection and shifted back when it would run
    /// past the end of the view, so it is always as full as possible.
    #[must_use]
    pub fn compute_viewmodel(&self, max_rows: usize) -> ViewModel {
        let total = self.count();
        let status = match self.status {
            SessionStatus::Uninitialized => ViewStatus::Idle,
            SessionStatus::Loading => ViewStatus::Loading,
            SessionStatus::Ready if total == 0 => ViewStatus::Empty,
            SessionStatus::Ready => ViewStatus::Results,
            SessionStatus::Closed => ViewStatus::Closed,
        };

        let header = match status {
            ViewStatus::Idle => "Type to search apps".to_string(),
            ViewStatus::Loading => "Loading apps".to_string(),
            ViewStatus::Empty => "No apps found".to_string(),
            ViewStatus::Closed => "Closed".to_string(),
            ViewStatus::Results => {
                let full = self.index.as_ref().map_or(0, SearchIndex::full_len);
                format!("{total} of {full} apps")
            }
        };

        let mut rows = Vec::new();
        let mut selected_index = 0;

        if let (ViewStatus::Results, Some(view)) = (status, self.view()) {
            // The field is public and may be out of range.
            let selected = self.selected_index.min(total.saturating_sub(1));
            let window = max_rows.max(1);
            let mut start = selected.saturating_sub(window / 2);
            let end = (start + window).min(total);
            if end.saturating_sub(start) < window {
                start = end.saturating_sub(window);
            }

            rows = (start..end)
                .filter_map(|position| {
                    view.get(position).map(|item| DisplayRow {
                        position: position + 1,
                        name: item.name.clone(),
                        identifier: item.identifier.clone(),
                        icon: item.icon.to_string(),
                        is_selected: position == selected,
                    })
                })
                .collect();
            selected_index = selected - start;
        }

        ViewModel {
            status,
            header,
            query: self.query.clone(),
            show_clear_button: normalize_query(&self.query).is_some(),
            rows,
            selected_index,
            total,
        }
    }
}
