//! In-memory inventory.
//!
//! Holds a fixed list of candidates. Used when the embedding application already
//! knows its applications, and by tests.

use crate::domain::error::Result;
use crate::inventory::backend::{AppInventory, Candidate};

/// Inventory backed by a vector of candidates.
///
/// # Examples
///
/// ```
/// use searchbox::inventory::{AppInventory, Candidate, MemoryInventory};
///
/// let inventory = MemoryInventory::new(vec![
///     Candidate::launchable("com.a.cam", "Camera", "camera"),
/// ]);
/// assert_eq!(inventory.enumerate()?.len(), 1);
/// # Ok::<(), searchbox::SearchboxError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    candidates: Vec<Candidate>,
}

impl MemoryInventory {
    #[must_use]
    pub const fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Builds an inventory of launchable candidates from `(name, identifier)` pairs.
    ///
    /// Every candidate gets the generic icon.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let candidates = pairs
            .into_iter()
            .map(|(name, identifier)| {
                Candidate::launchable(identifier, name, crate::domain::Icon::GENERIC)
            })
            .collect();
        Self { candidates }
    }
}

impl AppInventory for MemoryInventory {
    fn enumerate(&self) -> Result<Vec<Candidate>> {
        Ok(self.candidates.clone())
    }
}
