//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where installed applications live on the host and
//! expands user-supplied paths.

pub mod paths;

pub use paths::{application_dirs, config_file, expand_tilde, home_dir};
