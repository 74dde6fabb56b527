//! Searchbox: type-to-filter launcher index for installed applications.
//!
//! Searchbox provides the core of an application search box:
//! - One-shot background enumeration of launchable applications
//! - Case-insensitive substring filtering on name or identifier
//! - A session state machine that loads lazily on the first keystroke
//! - Freedesktop `.desktop` discovery, plus an in-memory inventory

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Front-end (main.rs)                                │  ← stdin queries, output
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Filter/index                                     │
//! │  - Session driver                                   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Loader        │   │ Inventory     │
//! │ (ui/)         │   │ (loader/)     │   │ (inventory/)  │
//! │ - View model  │   │ - One-shot    │   │ - Desktop     │
//! │ - Text / JSON │   │ - Cancellable │   │ - In-memory   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - XDG paths (infrastructure/)                      │
//! │  - Error types (domain/error)                       │
//! │  - Application item (domain/item)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state machine with event/action model
//! - [`domain`]: Core domain types (`AppItem`, errors)
//! - [`infrastructure`]: XDG directory resolution
//! - [`inventory`]: Sources of installed applications
//! - [`loader`]: One-shot background enumeration
//! - [`ui`]: View models and rendering
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/searchbox/config.toml
//! application_dirs = ["~/.local/share/applications", "/usr/share/applications"]
//! trace_level = "info"
//! output = "text"
//! launch_command = "gtk-launch"
//! max_rows = 20
//! ```
//!
//! # Session Flow
//!
//! 1. **Open**: A `SearchSession` starts `Uninitialized`; nothing is enumerated
//! 2. **First keystroke**: A non-blank query starts the load on a blocking worker
//! 3. **Typing while loading**: Queries are recorded, no second load starts
//! 4. **Load finished**: The full list is installed and the latest query applied
//! 5. **Typing**: Every change rebuilds the filtered view
//! 6. **Close**: An in-flight load is cancelled
//!
//! # Example
//!
//! ```rust
//! use searchbox::app::{Event, SearchSession};
//! use searchbox::inventory::MemoryInventory;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), searchbox::SearchboxError> {
//! let inventory = MemoryInventory::from_pairs([
//!     ("Calculator", "com.a.calc"),
//!     ("Calendar", "com.a.cal2"),
//!     ("Camera", "com.a.cam"),
//! ]);
//! let mut session = SearchSession::new(Arc::new(inventory));
//!
//! session.set_query("cal")?;
//! session.wait_for_load().await?;
//! assert_eq!(session.state().count(), 2);
//!
//! let (_, actions) = session.dispatch(&Event::Select)?;
//! assert_eq!(actions.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod inventory;
pub mod loader;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, SearchSession, SessionStatus};
pub use domain::{AppItem, Icon, Result, SearchboxError};
pub use ui::OutputFormat;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default number of result rows shown at once.
const DEFAULT_MAX_ROWS: usize = 20;

/// Configuration for the bundled front-end and session construction.
///
/// Read from a TOML file with [`Config::from_file`] or from `key=value` pairs with
/// [`Config::from_map`]. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Application directories to scan, in lookup order.
    ///
    /// Paths starting with `~` are expanded. Empty means the XDG directories of
    /// the environment.
    pub application_dirs: Vec<String>,

    /// Tracing level filter (`trace`, `debug`, `info`, `warn`, `error`).
    ///
    /// Overridden by `RUST_LOG`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Output format of the front-end. Default: text
    pub output: OutputFormat,

    /// Command run with the application identifier as its only argument when an
    /// application is launched, e.g. `gtk-launch`.
    pub launch_command: Option<String>,

    /// Maximum number of result rows per frame. Default: 20
    pub max_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            application_dirs: Vec::new(),
            trace_level: None,
            output: OutputFormat::Text,
            launch_command: None,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `application_dirs`: Comma-separated string → `Vec<String>` (filters empty values)
    /// - `trace_level`: String → `Option<String>`
    /// - `output`: `text` or `json` (falls back to text on parse error)
    /// - `launch_command`: String → `Option<String>`
    /// - `max_rows`: String → `usize` (falls back to 20 on parse error)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use searchbox::{Config, OutputFormat};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("application_dirs".to_string(), "~/apps, /opt/apps".to_string());
    /// map.insert("output".to_string(), "json".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.application_dirs, vec!["~/apps", "/opt/apps"]);
    /// assert_eq!(config.output, OutputFormat::Json);
    /// assert_eq!(config.max_rows, 20);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().with_overrides(map)
    }

    /// Applies `key=value` overrides on top of this configuration.
    ///
    /// Unknown keys are logged and ignored. Values that fail to parse keep the
    /// current setting.
    #[must_use]
    pub fn with_overrides(mut self, map: &BTreeMap<String, String>) -> Self {
        for (key, value) in map {
            match key.as_str() {
                "application_dirs" => {
                    self.application_dirs = value
                        .split(',')
                        .map(str::trim)
                        .filter(|dir| !dir.is_empty())
                        .map(String::from)
                        .collect();
                }
                "trace_level" => self.trace_level = Some(value.clone()),
                "output" => match value.parse() {
                    Ok(output) => self.output = output,
                    Err(e) => tracing::debug!(error = %e, "invalid output format, keeping current"),
                },
                "launch_command" => {
                    self.launch_command = Some(value.trim().to_string()).filter(|cmd| !cmd.is_empty());
                }
                "max_rows" => match value.trim().parse::<usize>() {
                    Ok(rows) if rows > 0 => self.max_rows = rows,
                    _ => tracing::debug!(value = %value, "invalid max_rows, keeping current"),
                },
                other => tracing::debug!(key = %other, "unknown configuration key ignored"),
            }
        }
        self
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchboxError::Io`] if the file cannot be read and
    /// [`SearchboxError::Config`] if it is not valid configuration TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&contents)
            .map_err(|e| SearchboxError::Config(format!("failed to parse {}: {e}", path.as_ref().display())))
    }

    /// Returns the application directories to scan, with `~` expanded.
    #[must_use]
    pub fn resolved_application_dirs(&self) -> Vec<PathBuf> {
        if self.application_dirs.is_empty() {
            infrastructure::application_dirs()
        } else {
            self.application_dirs
                .iter()
                .map(|dir| infrastructure::expand_tilde(dir))
                .collect()
        }
    }
}

/// Creates a search session over the desktop entries selected by `config`.
///
/// Nothing is scanned until the first non-blank query.
///
/// # Example
///
/// ```rust
/// use searchbox::{initialize, Config, SessionStatus};
///
/// let session = initialize(&Config::default());
/// assert_eq!(session.state().status, SessionStatus::Uninitialized);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> SearchSession {
    let dirs = config.resolved_application_dirs();
    tracing::debug!(dirs = ?dirs, "initializing search session");

    let inventory = inventory::DesktopInventory::new(dirs);
    SearchSession::new(Arc::new(inventory))
}
