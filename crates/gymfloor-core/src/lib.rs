//! # Gymfloor Core
//!
//! Core types for the gymfloor layout editor.
//! Provides the geometry model (rectangles in explicit coordinate spaces),
//! the layout document and its entities, the error taxonomy and the
//! layout event dispatcher used by rendering collaborators.

pub mod constants;
pub mod error;
pub mod event;
pub mod model;
pub mod units;

pub use error::{LayoutError, Result};

pub use event::{EventDispatcher, LayoutEvent, SaveState};

pub use model::{
    default_layout, Annex, Dimensions, Entrance, EntranceSide, Layout, Machine, Zone, ZoneType,
    DEFAULT_LAYOUT_ID,
};

pub use units::{
    Delta, Device, DevicePoint, DeviceSize, Floor, FloorPoint, FloorRect, Point, Rect, Size,
    ZoneLocal, ZoneRect,
};
