//! Inventory trait abstraction.
//!
//! This module defines the [`AppInventory`] trait, the capability the loader uses to
//! discover installed applications. The loader never touches platform APIs
//! directly; it only sees [`Candidate`] records and the two predicates below. This
//! keeps the loader testable with an in-memory inventory.

use crate::domain::error::{Result, SearchboxError};
use crate::domain::{AppItem, Icon};
use std::path::PathBuf;

/// A raw application record as enumerated by an inventory.
///
/// Candidates are not yet checked for launchability and may lack a label or an
/// icon. [`AppInventory::resolve`] turns a candidate into an [`AppItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    /// Stable identifier (package name, desktop file id).
    pub identifier: String,

    /// Display label, if the source provides one.
    pub label: Option<String>,

    /// Icon handle, if the source provides one.
    pub icon: Option<String>,

    /// Entry point used to start the application, if any.
    pub entry_point: Option<String>,

    /// Whether the source asks launchers not to show this application.
    pub hidden: bool,

    /// File the candidate was read from, for diagnostics.
    pub origin: Option<PathBuf>,
}

impl Candidate {
    /// Creates a launchable candidate with a label, icon and entry point.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchbox::inventory::Candidate;
    ///
    /// let candidate = Candidate::launchable("com.a.calc", "Calculator", "calc");
    /// assert_eq!(candidate.label.as_deref(), Some("Calculator"));
    /// assert!(!candidate.hidden);
    /// ```
    pub fn launchable(
        identifier: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        let identifier = identifier.into();
        Self {
            entry_point: Some(identifier.clone()),
            identifier,
            label: Some(label.into()),
            icon: Some(icon.into()),
            hidden: false,
            origin: None,
        }
    }
}

/// Source of installed applications.
///
/// Implementations must be `Send + Sync` since enumeration runs on a blocking
/// worker thread while the session keeps a handle to the inventory.
pub trait AppInventory: Send + Sync {
    /// Lists every candidate application, launchable or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the inventory cannot be enumerated at all. Problems with
    /// individual candidates belong in [`AppInventory::resolve`].
    fn enumerate(&self) -> Result<Vec<Candidate>>;

    /// Returns whether the candidate has a valid entry point and may be listed.
    fn is_launchable(&self, candidate: &Candidate) -> bool {
        !candidate.hidden
            && candidate
                .entry_point
                .as_deref()
                .is_some_and(|entry| !entry.trim().is_empty())
    }

    /// Resolves the display name and icon of a candidate.
    ///
    /// The default implementation requires both a non-empty label and an icon.
    ///
    /// # Errors
    ///
    /// Returns [`SearchboxError::Resolution`] when the label or icon cannot be
    /// resolved. The loader skips such candidates.
    fn resolve(&self, candidate: &Candidate) -> Result<AppItem> {
        let name = resolve_label(candidate)?;
        let icon = candidate
            .icon
            .as_deref()
            .filter(|icon| !icon.trim().is_empty())
            .map(Icon::new)
            .ok_or_else(|| SearchboxError::Resolution {
                identifier: candidate.identifier.clone(),
                reason: "no icon".to_string(),
            })?;

        Ok(AppItem::new(name, candidate.identifier.clone(), icon))
    }
}

/// Returns the trimmed, non-empty label of a candidate.
///
/// # Errors
///
/// Returns [`SearchboxError::Resolution`] if the candidate has no usable label.
pub fn resolve_label(candidate: &Candidate) -> Result<String> {
    candidate
        .label
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(String::from)
        .ok_or_else(|| SearchboxError::Resolution {
            identifier: candidate.identifier.clone(),
            reason: "no label".to_string(),
        })
}
