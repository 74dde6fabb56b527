//! Application inventories.
//!
//! An inventory is the collaborator that knows which applications are installed.
//! The loader depends only on the [`AppInventory`] trait.
//!
//! # Modules
//!
//! - `backend`: The [`AppInventory`] trait and the [`Candidate`] record
//! - `desktop`: Freedesktop `.desktop` file scanner
//! - `memory`: Fixed in-memory candidate list

pub mod backend;
pub mod desktop;
pub mod memory;

pub use backend::{resolve_label, AppInventory, Candidate};
pub use desktop::{DesktopEntry, DesktopInventory};
pub use memory::MemoryInventory;
