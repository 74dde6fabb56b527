//! Domain layer for searchbox.
//!
//! This module contains the core domain types, independent of any particular
//! application inventory or front-end.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Application item model and name ordering
//!
//! # Examples
//!
//! ```
//! use searchbox::domain::{AppItem, Icon, Result};
//!
//! fn calculator() -> Result<AppItem> {
//!     Ok(AppItem::new("Calculator", "org.gnome.Calculator", Icon::new("accessories-calculator")))
//! }
//! ```

pub mod error;
pub mod item;

pub use error::{Result, SearchboxError};
pub use item::{compare_names, AppItem, Icon};
