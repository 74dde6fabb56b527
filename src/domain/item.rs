//! Application item domain model.
//!
//! An [`AppItem`] is one launchable application as shown in the result list: a
//! display name, a stable identifier and an opaque icon handle. Items are
//! immutable once produced by the loader.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Opaque icon handle attached to an item.
///
/// The core never interprets it. Depending on the inventory it names an icon in
/// the current icon theme (`"firefox"`) or points at an image file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    /// Icon used when an inventory has nothing more specific.
    pub const GENERIC: &'static str = "application-x-executable";

    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Returns the generic application icon.
    #[must_use]
    pub fn generic() -> Self {
        Self(Self::GENERIC.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A launchable application.
///
/// # Fields
///
/// - `name`: Display name
/// - `identifier`: Unique, stable identifier (package name or desktop file id)
/// - `icon`: Opaque icon handle for the presentation layer
///
/// # Examples
///
/// ```
/// use searchbox::{AppItem, Icon};
///
/// let item = AppItem::new("Calculator", "com.a.calc", Icon::generic());
/// assert!(item.matches("calc"));
/// assert!(item.matches("com.a"));
/// assert!(!item.matches("camera"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppItem {
    pub name: String,
    pub identifier: String,
    pub icon: Icon,
}

impl AppItem {
    #[must_use]
    pub fn new(name: impl Into<String>, identifier: impl Into<String>, icon: Icon) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            icon,
        }
    }

    /// Returns whether this item matches an already normalized query.
    ///
    /// `needle` must be trimmed and lower-cased. The item matches when either its
    /// lower-cased name or its lower-cased identifier contains the needle.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.identifier.to_lowercase().contains(needle)
    }
}

/// Compares two names ignoring case.
///
/// Used for the display order of the full list. Characters are lower-cased one
/// by one so multi-character lowercase mappings compare correctly.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
