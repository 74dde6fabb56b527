//! Presentation-facing types.
//!
//! # Modules
//!
//! - [`viewmodel`]: Immutable view model computed from session state
//! - [`renderer`]: Text and JSON rendering of view models

pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{DisplayRow, ViewModel, ViewStatus};

use serde::Deserialize;
use std::str::FromStr;

/// Output format of the bundled front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text blocks.
    #[default]
    Text,
    /// One JSON view model per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
