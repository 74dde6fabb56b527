//! Structured logging for the library and the bundled front-end.
//!
//! Every layer logs through `tracing` spans and events (`load_applications`,
//! `set_query`, `handle_event`, ...). This module installs the subscriber that
//! prints them.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
