//! Layout document model
//!
//! Zones own machines (zone-local coordinates); the layout owns zones,
//! annexes, the room dimensions and the entrance. No back-references: a
//! machine's zone is found by id lookup.

pub mod defaults;
pub mod entrance;
pub mod layout;
pub mod zone;

pub use defaults::{default_layout, DEFAULT_LAYOUT_ID};
pub use entrance::{Dimensions, Entrance, EntranceSide};
pub use layout::Layout;
pub use zone::{Annex, Machine, Zone, ZoneType};
