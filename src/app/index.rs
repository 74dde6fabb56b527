//! Query filtering over the full application list.
//!
//! [`SearchIndex`] keeps the full list and the [`FilteredView`] for the current
//! query. Every query change builds a fresh view from the full list; a view is
//! never mutated after it is built, so handing one to the presentation layer is
//! safe while the next query is applied.
//!
//! # Matching
//!
//! The query is trimmed. An empty query shows the full list. Otherwise the query
//! is lower-cased and an item matches if its lower-cased name or identifier
//! contains it. Matches keep full-list order.
//!
//! # Example
//!
//! ```rust
//! use searchbox::app::SearchIndex;
//! use searchbox::{AppItem, Icon};
//!
//! let mut index = SearchIndex::new(vec![
//!     AppItem::new("Calculator", "com.a.calc", Icon::generic()),
//!     AppItem::new("Calendar", "com.a.cal2", Icon::generic()),
//!     AppItem::new("Camera", "com.a.cam", Icon::generic()),
//! ]);
//!
//! index.set_query("cal");
//! let names: Vec<_> = index.iter().map(|item| item.name.as_str()).collect();
//! assert_eq!(names, ["Calculator", "Calendar"]);
//! ```

use crate::domain::AppItem;
use std::sync::Arc;

/// Trims and lower-cases a query. Returns `None` for blank queries.
///
/// # Examples
///
/// ```
/// use searchbox::app::normalize_query;
///
/// assert_eq!(normalize_query("  COM.A.CAM "), Some("com.a.cam".to_string()));
/// assert_eq!(normalize_query("   "), None);
/// ```
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Immutable, order-preserving selection of items from the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    source: Arc<[AppItem]>,
    positions: Arc<[usize]>,
}

impl FilteredView {
    /// A view containing every item of `source`.
    #[must_use]
    pub fn full(source: &Arc<[AppItem]>) -> Self {
        Self {
            source: Arc::clone(source),
            positions: (0..source.len()).collect(),
        }
    }

    /// Builds the view of `source` for `query`.
    #[must_use]
    pub fn build(source: &Arc<[AppItem]>, query: &str) -> Self {
        let Some(needle) = normalize_query(query) else {
            return Self::full(source);
        };

        let positions = source
            .iter()
            .enumerate()
            .filter(|(_, item)| item.matches(&needle))
            .map(|(position, _)| position)
            .collect();

        Self {
            source: Arc::clone(source),
            positions,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the item at `index` within the view.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AppItem> {
        self.positions
            .get(index)
            .and_then(|&position| self.source.get(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppItem> + '_ {
        self.positions.iter().map(|&position| &self.source[position])
    }

    /// Positions of the view's items within the full list, ascending.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<AppItem> {
        self.iter().cloned().collect()
    }
}

/// Full list plus the filtered view for the current query.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    items: Arc<[AppItem]>,
    query: String,
    view: FilteredView,
}

impl SearchIndex {
    /// Creates an index over a full list. The initial view is the full list.
    #[must_use]
    pub fn new(items: impl Into<Arc<[AppItem]>>) -> Self {
        let items = items.into();
        let view = FilteredView::full(&items);
        Self {
            items,
            query: String::new(),
            view,
        }
    }

    /// Replaces the query and rebuilds the filtered view.
    pub fn set_query(&mut self, query: &str) {
        let _span = tracing::debug_span!(
            "set_query",
            total_items = self.items.len(),
            query_len = query.len()
        )
        .entered();

        query.clone_into(&mut self.query);
        self.view = FilteredView::build(&self.items, query);

        tracing::debug!(filtered_count = self.view.len(), "query applied");
    }

    /// Number of items in the current view.
    #[must_use]
    pub fn count(&self) -> usize {
        self.view.len()
    }

    #[must_use]
    pub const fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppItem> + '_ {
        self.view.iter()
    }

    /// The query last passed to [`SearchIndex::set_query`], untrimmed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn items(&self) -> &[AppItem] {
        &self.items
    }

    #[must_use]
    pub fn full_len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Icon;

    fn index() -> SearchIndex {
        SearchIndex::new(vec![
            AppItem::new("Calculator", "com.a.calc", Icon::generic()),
            AppItem::new("Calendar", "com.a.cal2", Icon::generic()),
            AppItem::new("Camera", "com.a.cam", Icon::generic()),
        ])
    }

    fn names(index: &SearchIndex) -> Vec<&str> {
        index.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn new_index_shows_full_list() {
        let index = index();
        assert_eq!(index.count(), 3);
        assert_eq!(index.query(), "");
    }

    #[test]
    fn substring_on_name_keeps_order() {
        let mut index = index();
        index.set_query("cal");
        assert_eq!(names(&index), ["Calculator", "Calendar"]);
    }

    #[test]
    fn whitespace_query_shows_full_list() {
        let mut index = index();
        index.set_query("cam");
        index.set_query("  ");
        assert_eq!(names(&index), ["Calculator", "Calendar", "Camera"]);
    }

    #[test]
    fn identifier_match_is_case_insensitive() {
        let mut index = index();
        index.set_query("COM.A.CAM");
        assert_eq!(names(&index), ["Camera"]);
    }

    #[test]
    fn no_match_gives_empty_view() {
        let mut index = index();
        index.set_query("zzz");
        assert_eq!(index.count(), 0);
        assert!(index.view().is_empty());
        assert!(index.view().get(0).is_none());
    }

    #[test]
    fn earlier_views_are_not_affected_by_later_queries() {
        let mut index = index();
        index.set_query("cal");
        let before = index.view().clone();
        index.set_query("cam");
        assert_eq!(before.len(), 2);
        assert_eq!(index.count(), 1);
    }
}
