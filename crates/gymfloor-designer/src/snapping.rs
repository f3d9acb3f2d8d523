//! Snapping engine: grid snap, edge snap against reference lines, aspect lock.
//!
//! Reference lines are the room's outer edges plus every annex edge. They are
//! built once per drag ([`ReferenceLines::for_layout`]) and reused for every
//! pointer move of that drag.

use gymfloor_core::constants::{EDGE_SNAP_THRESHOLD, GRID_SIZE};
use gymfloor_core::{Delta, Floor, FloorRect, Layout, ZoneLocal, ZoneRect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a reference line is chosen when several are within the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapPolicy {
    /// Closest line wins; ties go to the earlier line
    #[default]
    Nearest,
    /// First line within the threshold in iteration order wins
    FirstWithinThreshold,
}

impl fmt::Display for SnapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::FirstWithinThreshold => write!(f, "first_within_threshold"),
        }
    }
}

impl FromStr for SnapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "nearest" => Ok(Self::Nearest),
            "first" | "first_within_threshold" => Ok(Self::FirstWithinThreshold),
            _ => Err(format!("Unknown snap policy: {}", s)),
        }
    }
}

/// Snapping parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    pub grid_size: f64,
    pub edge_threshold: f64,
    pub edge_snap_enabled: bool,
    pub policy: SnapPolicy,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            edge_threshold: EDGE_SNAP_THRESHOLD,
            edge_snap_enabled: true,
            policy: SnapPolicy::Nearest,
        }
    }
}

/// Round to the nearest multiple of `grid`; halves round up.
///
/// A non-positive grid disables snapping.
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid + 0.5).floor() * grid
}

/// Alignment lines for edge snapping, one set per axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceLines {
    /// x coordinates
    pub vertical: Vec<f64>,
    /// y coordinates
    pub horizontal: Vec<f64>,
}

impl ReferenceLines {
    /// Room edges plus the edges of every annex except `exclude_annex`.
    pub fn for_layout(layout: &Layout, exclude_annex: Option<&str>) -> Self {
        let mut lines = Self {
            vertical: vec![0.0, layout.dimensions.width],
            horizontal: vec![0.0, layout.dimensions.height],
        };
        lines.push_annexes(layout, exclude_annex);
        lines
    }

    /// Annex edges only. Used while the room itself is being resized.
    pub fn for_room_resize(layout: &Layout) -> Self {
        let mut lines = Self::default();
        lines.push_annexes(layout, None);
        lines
    }

    fn push_annexes(&mut self, layout: &Layout, exclude: Option<&str>) {
        for annex in layout
            .annexes
            .iter()
            .filter(|a| Some(a.id.as_str()) != exclude)
        {
            self.vertical.extend([annex.rect.x, annex.rect.right()]);
            self.horizontal.extend([annex.rect.y, annex.rect.bottom()]);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }
}

/// Reference line within the threshold of `value`, chosen per the policy.
pub fn find_line(value: f64, lines: &[f64], config: &SnapConfig) -> Option<f64> {
    let mut within = lines
        .iter()
        .copied()
        .filter(|line| (line - value).abs() <= config.edge_threshold);
    match config.policy {
        SnapPolicy::FirstWithinThreshold => within.next(),
        SnapPolicy::Nearest => within.fold(None, |best: Option<f64>, line| match best {
            Some(b) if (b - value).abs() <= (line - value).abs() => Some(b),
            _ => Some(line),
        }),
    }
}

/// Snap a leading edge position on one axis for a move.
///
/// Tries the leading edge, then the trailing edge (`pos + size`), then the grid.
pub fn snap_move_axis(pos: f64, size: f64, lines: &[f64], config: &SnapConfig) -> f64 {
    if config.edge_snap_enabled {
        if let Some(line) = find_line(pos, lines, config) {
            return line;
        }
        if let Some(line) = find_line(pos + size, lines, config) {
            return line - size;
        }
    }
    snap_to_grid(pos, config.grid_size)
}

/// Snap the origin of a moved rectangle on both axes.
pub fn snap_move(proposed: FloorRect, lines: &ReferenceLines, config: &SnapConfig) -> FloorRect {
    proposed.with_origin(
        snap_move_axis(proposed.x, proposed.width, &lines.vertical, config),
        snap_move_axis(proposed.y, proposed.height, &lines.horizontal, config),
    )
}

/// Snap a size whose moving edge is at `origin + size`.
///
/// The moving edge snaps onto a reference line when one is close, otherwise
/// the size snaps to the grid. The result is at least `min`.
pub fn snap_resize_axis(
    origin: f64,
    size: f64,
    lines: &[f64],
    config: &SnapConfig,
    min: f64,
) -> f64 {
    let snapped = match config
        .edge_snap_enabled
        .then(|| find_line(origin + size, lines, config))
        .flatten()
    {
        Some(line) => line - origin,
        None => snap_to_grid(size, config.grid_size),
    };
    snapped.max(min)
}

/// Resize from the bottom-right handle with edge snapping on both axes.
pub fn snap_resize(
    initial: FloorRect,
    delta: Delta<Floor>,
    lines: &ReferenceLines,
    config: &SnapConfig,
    min: f64,
) -> FloorRect {
    initial.with_size(
        snap_resize_axis(
            initial.x,
            initial.width + delta.dx,
            &lines.vertical,
            config,
            min,
        ),
        snap_resize_axis(
            initial.y,
            initial.height + delta.dy,
            &lines.horizontal,
            config,
            min,
        ),
    )
}

/// Resize keeping the initial aspect ratio.
///
/// The axis with the larger absolute delta drives; the other is derived from
/// the ratio. Both are grid-snapped, then clamped to `min`.
pub fn aspect_locked_resize(
    initial: FloorRect,
    delta: Delta<Floor>,
    grid: f64,
    min: f64,
) -> FloorRect {
    let mut width = initial.width + delta.dx;
    let mut height = initial.height + delta.dy;
    let ratio = initial.width / initial.height;
    // A degenerate initial rect has no ratio to keep and resizes freely.
    if ratio.is_finite() && ratio > 0.0 {
        if delta.dx.abs() > delta.dy.abs() {
            height = width / ratio;
        } else {
            width = height * ratio;
        }
    }
    initial.with_size(
        snap_to_grid(width, grid).max(min),
        snap_to_grid(height, grid).max(min),
    )
}

/// Grid-snapped machine move, clamped to stay inside a `zone_width × zone_height` zone.
pub fn snap_machine_move(
    initial: ZoneRect,
    delta: Delta<ZoneLocal>,
    zone_width: f64,
    zone_height: f64,
    grid: f64,
) -> ZoneRect {
    let x = snap_to_grid(initial.x + delta.dx, grid);
    let y = snap_to_grid(initial.y + delta.dy, grid);
    initial.with_origin(
        clamp_axis(x, 0.0, zone_width - initial.width),
        clamp_axis(y, 0.0, zone_height - initial.height),
    )
}

/// Grid-snapped machine resize.
///
/// The far edge is kept inside the zone where possible; the minimum size wins
/// over containment.
pub fn snap_machine_resize(
    initial: ZoneRect,
    delta: Delta<ZoneLocal>,
    zone_width: f64,
    zone_height: f64,
    grid: f64,
    min: f64,
) -> ZoneRect {
    let width = snap_to_grid(initial.width + delta.dx, grid).min(zone_width - initial.x);
    let height = snap_to_grid(initial.height + delta.dy, grid).min(zone_height - initial.y);
    initial.with_size(width.max(min), height.max(min))
}

/// `value` limited to `[lo, hi]`; `lo` wins when the range is empty.
pub fn clamp_axis(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}
