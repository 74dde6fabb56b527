//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the front-end and the loader. It implements the
//! event-driven state machine of a search session.
//!
//! # Architecture
//!
//! ```text
//! Query / Keys → Events → Event Handler → State Mutations → Actions → Side Effects
//!                             ↑                                  ↓
//!                             └────────── Load completion ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transitions
//! - [`index`]: Query normalization and the filtered view
//! - [`modes`]: Session status state machine
//! - [`session`]: Async driver owning the loader
//! - [`state`]: Session state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use searchbox::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new();
//! let (render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(!render && actions.is_empty());
//! # Ok::<(), searchbox::SearchboxError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod index;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use index::{normalize_query, FilteredView, SearchIndex};
pub use modes::SessionStatus;
pub use session::SearchSession;
pub use state::AppState;
