//! Loader result types.
//!
//! The loader hands exactly one [`LoadOutcome`] back to the session. A completed
//! load carries a [`LoadReport`] with the sorted full list and bookkeeping about
//! the candidates that did not make it into the list.

use crate::domain::AppItem;
use serde::Serialize;
use std::sync::Arc;

/// Result of one enumeration pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Launchable items sorted case-insensitively by name.
    pub items: Arc<[AppItem]>,

    /// Candidates skipped because their label or icon could not be resolved.
    pub skipped: usize,

    /// Candidates rejected by the launchability predicate.
    pub not_launchable: usize,

    /// Resolved items dropped because an earlier item had the same identifier.
    pub duplicates: usize,

    /// Unix timestamp at which the load finished.
    pub loaded_at: i64,
}

impl LoadReport {
    /// An empty report stamped with the current time.
    ///
    /// Used when the inventory could not be enumerated at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            skipped: 0,
            not_launchable: 0,
            duplicates: 0,
            loaded_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Completion signal delivered once per load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The enumeration ran to completion.
    Loaded(LoadReport),

    /// The enumeration was cancelled before it finished.
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Icon;

    #[test]
    fn report_serializes_shared_items() {
        let report = LoadReport {
            items: Arc::from(vec![AppItem::new("Camera", "com.a.cam", Icon::generic())]),
            skipped: 2,
            ..LoadReport::empty()
        };

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["items"][0]["identifier"], "com.a.cam");
        assert_eq!(value["items"][0]["icon"], Icon::GENERIC);
        assert_eq!(value["skipped"], 2);
    }
}
