//! Error types for searchbox.
//!
//! This module defines the centralized error type [`SearchboxError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Note that a failure to resolve a single application is *not* an error the caller
//! ever sees: the loader skips such candidates. [`SearchboxError::Resolution`] exists
//! so inventories can report why a candidate was skipped.

use thiserror::Error;

/// The main error type for searchbox operations.
///
/// # Examples
///
/// ```
/// use searchbox::SearchboxError;
///
/// fn resolve_label() -> Result<(), SearchboxError> {
///     Err(SearchboxError::Resolution {
///         identifier: "org.example.Broken".to_string(),
///         reason: "missing Name".to_string(),
///     })
/// }
///
/// assert!(resolve_label().is_err());
/// ```
#[derive(Debug, Error)]
pub enum SearchboxError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The application inventory could not be enumerated at all.
    ///
    /// `DesktopInventory` returns it when none of its directories exist. The
    /// loader recovers by loading an empty list.
    #[error("Inventory error: {0}")]
    Inventory(String),

    /// A single candidate could not be turned into an application item.
    ///
    /// Occurs when the label or icon of a candidate cannot be loaded. The loader
    /// recovers from this locally by skipping the candidate.
    #[error("Failed to resolve {identifier}: {reason}")]
    Resolution {
        /// Identifier of the candidate that failed.
        identifier: String,
        /// What could not be resolved.
        reason: String,
    },

    /// A view model could not be serialized for output.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The background load task failed or was torn down.
    #[error("Loader error: {0}")]
    Loader(String),
}

/// A specialized `Result` type for searchbox operations.
pub type Result<T> = std::result::Result<T, SearchboxError>;
