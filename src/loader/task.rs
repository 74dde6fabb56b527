//! The enumeration pass itself.
//!
//! [`enumerate_items`] is plain blocking code; [`Loader`](super::Loader) runs it on
//! a blocking worker thread.

use crate::domain::{compare_names, AppItem};
use crate::inventory::AppInventory;
use crate::loader::messages::{LoadOutcome, LoadReport};
use std::collections::HashSet;
use tokio_util::sync::CancellationToken;

/// Enumerates, filters, resolves and sorts the applications of an inventory.
///
/// # Algorithm
///
/// 1. Ask the inventory for every candidate
/// 2. Drop candidates that are not launchable
/// 3. Resolve name and icon; skip candidates that fail to resolve
/// 4. Keep only the first item per identifier
/// 5. Stable sort by name, ignoring case
///
/// The cancellation token is checked before each candidate. A failure to
/// enumerate the inventory is logged and yields an empty report.
pub fn enumerate_items(inventory: &dyn AppInventory, cancel: &CancellationToken) -> LoadOutcome {
    let candidates = match inventory.enumerate() {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!(error = %e, "inventory enumeration failed");
            return LoadOutcome::Loaded(LoadReport::empty());
        }
    };

    tracing::debug!(candidates = candidates.len(), "candidates enumerated");

    let mut items: Vec<AppItem> = Vec::with_capacity(candidates.len());
    let mut seen = HashSet::with_capacity(candidates.len());
    let mut skipped = 0;
    let mut not_launchable = 0;
    let mut duplicates = 0;

    for candidate in &candidates {
        if cancel.is_cancelled() {
            tracing::debug!(resolved = items.len(), "load cancelled");
            return LoadOutcome::Cancelled;
        }

        if !inventory.is_launchable(candidate) {
            not_launchable += 1;
            continue;
        }

        match inventory.resolve(candidate) {
            Ok(item) => {
                if seen.insert(item.identifier.clone()) {
                    items.push(item);
                } else {
                    tracing::debug!(identifier = %item.identifier, "duplicate identifier dropped");
                    duplicates += 1;
                }
            }
            Err(e) => {
                tracing::debug!(
                    identifier = %candidate.identifier,
                    origin = ?candidate.origin,
                    error = %e,
                    "skipping candidate"
                );
                skipped += 1;
            }
        }
    }

    if cancel.is_cancelled() {
        return LoadOutcome::Cancelled;
    }

    sort_items(&mut items);

    tracing::debug!(
        items = items.len(),
        skipped = skipped,
        not_launchable = not_launchable,
        duplicates = duplicates,
        "applications loaded"
    );

    LoadOutcome::Loaded(LoadReport {
        items: items.into(),
        skipped,
        not_launchable,
        duplicates,
        loaded_at: chrono::Utc::now().timestamp(),
    })
}

/// Sorts items by name ignoring case. Equal names keep their relative order.
pub fn sort_items(items: &mut [AppItem]) {
    items.sort_by(|a, b| compare_names(&a.name, &b.name));
}
