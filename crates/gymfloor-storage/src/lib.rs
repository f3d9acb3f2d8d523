//! # Gymfloor Storage
//!
//! The storage collaborator: four operations over layout documents keyed by
//! id, plus the pieces an editing session needs around them.
//!
//! - [`LayoutStore`]: async list/create/save/delete
//! - [`InMemoryStore`]: process-local store, used in tests and demos
//! - [`JsonDirectoryStore`]: one JSON file per layout in a directory
//! - [`LayoutLibrary`]: non-fatal wrapper that logs failures and falls back
//!   to the built-in default layout
//! - [`SaveIndicator`]: idle → saving → saved → idle indicator

pub mod error;
pub mod file_store;
pub mod library;
pub mod memory;
pub mod save_state;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use file_store::{JsonDirectoryStore, LayoutFile};
pub use library::{LayoutLibrary, PendingLayoutDelete};
pub use memory::InMemoryStore;
pub use save_state::{SaveIndicator, SaveTicket};
pub use traits::LayoutStore;
