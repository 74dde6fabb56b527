//! Line-oriented rendering of view models.
//!
//! The library does not draw anything itself. This renderer turns a
//! [`ViewModel`] into text for the bundled binary, either as a human-readable
//! block or as one JSON document per frame.
//!
//! # Example
//!
//! ```rust
//! use searchbox::app::AppState;
//! use searchbox::ui::{render, OutputFormat};
//!
//! let state = AppState::new();
//! let frame = render(&state.compute_viewmodel(10), OutputFormat::Text)?;
//! assert!(frame.contains("Type to search apps"));
//! # Ok::<(), searchbox::SearchboxError>(())
//! ```

use super::viewmodel::{ViewModel, ViewStatus};
use super::OutputFormat;
use crate::domain::error::{Result, SearchboxError};
use std::fmt::Write as _;

/// Renders a view model in the requested format. The result has no trailing
/// newline.
///
/// # Errors
///
/// Returns [`SearchboxError::Serialization`] if JSON serialization fails.
pub fn render(vm: &ViewModel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(vm)),
        OutputFormat::Json => serde_json::to_string(vm)
            .map_err(|e| SearchboxError::Serialization(e.to_string())),
    }
}

/// Renders the human-readable form.
///
/// ```text
/// search: cal  [x]
/// 2 of 3 apps
/// >   1. Calculator  (com.a.calc)
///     2. Calendar  (com.a.cal2)
/// ```
#[must_use]
pub fn render_text(vm: &ViewModel) -> String {
    let mut out = String::new();

    let _ = write!(out, "search: {}", vm.query);
    if vm.show_clear_button {
        out.push_str("  [x]");
    }
    out.push('\n');
    out.push_str(&vm.header);

    if vm.status == ViewStatus::Results {
        for row in &vm.rows {
            let marker = if row.is_selected { '>' } else { ' ' };
            let _ = write!(
                out,
                "\n{marker} {:>3}. {}  ({})",
                row.position, row.name, row.identifier
            );
        }
    }

    out
}
