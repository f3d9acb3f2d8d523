//! Shared constants for layout geometry, snapping and viewport framing.
//!
//! All lengths are floor units (unitless document units, not pixels).

/// Grid spacing used for grid snapping.
pub const GRID_SIZE: f64 = 10.0;

/// Distance within which an edge snaps onto a reference line.
pub const EDGE_SNAP_THRESHOLD: f64 = 15.0;

/// Padding added around the floor extent in full view.
pub const FULL_VIEW_PADDING: f64 = 150.0;

/// Minimum full-view canvas width.
pub const FULL_VIEW_MIN_WIDTH: f64 = 800.0;

/// Minimum full-view canvas height.
pub const FULL_VIEW_MIN_HEIGHT: f64 = 600.0;

/// Padding around a focused zone.
pub const FOCUS_PADDING: f64 = 40.0;

/// Minimum focused window size (both axes), so tiny zones don't over-zoom.
pub const FOCUS_MIN_SIZE: f64 = 500.0;

/// Minimum zone size while dragging a resize handle.
pub const MIN_ZONE_SIZE: f64 = 40.0;

/// Minimum annex size while dragging a resize handle.
pub const MIN_ANNEX_SIZE: f64 = 50.0;

/// Minimum machine size while dragging a resize handle.
pub const MIN_MACHINE_SIZE: f64 = 10.0;

/// Minimum room width/height.
pub const MIN_ROOM_SIZE: f64 = 200.0;

/// Maximum room width/height.
pub const MAX_ROOM_SIZE: f64 = 2000.0;

/// Minimum width/height accepted from a numeric property field.
pub const MIN_FIELD_SIZE: f64 = 10.0;

/// Minimum entrance width accepted from a property field.
pub const MIN_ENTRANCE_WIDTH: f64 = 20.0;

/// Default room width for new layouts.
pub const DEFAULT_ROOM_WIDTH: f64 = 780.0;

/// Default room height for new layouts.
pub const DEFAULT_ROOM_HEIGHT: f64 = 580.0;

/// Default floor color for new layouts.
pub const DEFAULT_FLOOR_COLOR: &str = "#1e293b";

/// Default number of undo snapshots kept.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;
