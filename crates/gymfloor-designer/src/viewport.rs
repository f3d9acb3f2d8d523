//! Viewport calculation for full-layout, focused-zone and locked views.
//!
//! A [`ViewWindow`] describes the visible coordinate window: translate floor
//! coordinates by `(offset_x, offset_y)` and render inside a
//! `box_width × box_height` canvas. The renderer scales that canvas to its
//! pixel size; converting pixel deltas back to floor units goes through the
//! window that was active when the drag started ([`LockedView`]).

use gymfloor_core::constants::{
    FOCUS_MIN_SIZE, FOCUS_PADDING, FULL_VIEW_MIN_HEIGHT, FULL_VIEW_MIN_WIDTH, FULL_VIEW_PADDING,
};
use gymfloor_core::{Delta, Device, DevicePoint, DeviceSize, Floor, FloorPoint, FloorRect, Layout};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Framing parameters for the viewport calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Padding added to the floor extent in full view
    pub full_padding: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Padding on each side of a focused zone
    pub focus_padding: f64,
    /// Minimum focused window size on both axes
    pub focus_min_size: f64,
    /// Duration of zoom transitions in the viewer
    pub transition_ms: u64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            full_padding: FULL_VIEW_PADDING,
            min_width: FULL_VIEW_MIN_WIDTH,
            min_height: FULL_VIEW_MIN_HEIGHT,
            focus_padding: FOCUS_PADDING,
            focus_min_size: FOCUS_MIN_SIZE,
            transition_ms: 500,
        }
    }
}

/// Visible coordinate window handed to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewWindow {
    pub box_width: f64,
    pub box_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ViewWindow {
    pub fn new(box_width: f64, box_height: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            box_width,
            box_height,
            offset_x,
            offset_y,
        }
    }

    /// Floor point to window coordinates (`[0, box_width] × [0, box_height]`).
    pub fn floor_to_window(&self, p: FloorPoint) -> (f64, f64) {
        (p.x + self.offset_x, p.y + self.offset_y)
    }

    /// Whether a floor rectangle, once offset, lies fully inside the window.
    pub fn contains(&self, rect: &FloorRect) -> bool {
        let left = rect.x + self.offset_x;
        let top = rect.y + self.offset_y;
        left >= 0.0
            && top >= 0.0
            && left + rect.width <= self.box_width
            && top + rect.height <= self.box_height
    }

    /// Floor units per rendered pixel on each axis.
    pub fn scale_for(&self, rendered: DeviceSize) -> (f64, f64) {
        let sx = if rendered.width > 0.0 {
            self.box_width / rendered.width
        } else {
            1.0
        };
        let sy = if rendered.height > 0.0 {
            self.box_height / rendered.height
        } else {
            1.0
        };
        (sx, sy)
    }

    /// Convert a pixel delta into a floor delta.
    pub fn device_delta_to_floor(&self, delta: Delta<Device>, rendered: DeviceSize) -> Delta<Floor> {
        let (sx, sy) = self.scale_for(rendered);
        Delta::new(delta.dx * sx, delta.dy * sy)
    }

    /// Convert a pixel position (relative to the rendered canvas) into a floor point.
    pub fn device_to_floor(&self, p: DevicePoint, rendered: DeviceSize) -> FloorPoint {
        let (sx, sy) = self.scale_for(rendered);
        FloorPoint::new(p.x * sx - self.offset_x, p.y * sy - self.offset_y)
    }

    /// Linear interpolation between two windows, `t` in `[0, 1]`.
    pub fn lerp(&self, to: &ViewWindow, t: f64) -> ViewWindow {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        ViewWindow::new(
            mix(self.box_width, to.box_width),
            mix(self.box_height, to.box_height),
            mix(self.offset_x, to.offset_x),
            mix(self.offset_y, to.offset_y),
        )
    }
}

impl fmt::Display for ViewWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}×{} @ ({}, {})",
            self.box_width, self.box_height, self.offset_x, self.offset_y
        )
    }
}

/// Full-layout view framing the room, its annexes and every zone.
///
/// With all content at non-negative coordinates this is
/// `box = max(min, max_edge + padding)`, `offset = (box - max_edge) / 2`.
/// Content left of or above the origin widens the extent and shifts the offset
/// so it stays inside the window.
pub fn full_view(layout: &Layout, config: &ViewportConfig) -> ViewWindow {
    let extent = layout.content_extent();
    let min_x = extent.x.min(0.0);
    let min_y = extent.y.min(0.0);
    let width = extent.right() - min_x;
    let height = extent.bottom() - min_y;

    let box_width = config.min_width.max(width + config.full_padding);
    let box_height = config.min_height.max(height + config.full_padding);
    ViewWindow::new(
        box_width,
        box_height,
        (box_width - width) / 2.0 - min_x,
        (box_height - height) / 2.0 - min_y,
    )
}

/// Window centred on one zone, padded and at least `focus_min_size` on both axes.
pub fn focused_view(zone: &FloorRect, config: &ViewportConfig) -> ViewWindow {
    let box_width = (zone.width + 2.0 * config.focus_padding).max(config.focus_min_size);
    let box_height = (zone.height + 2.0 * config.focus_padding).max(config.focus_min_size);
    ViewWindow::new(
        box_width,
        box_height,
        (box_width - zone.width) / 2.0 - zone.x,
        (box_height - zone.height) / 2.0 - zone.y,
    )
}

/// Focused view for `focus` when that zone still exists, otherwise full view.
pub fn view_for(layout: &Layout, focus: Option<&str>, config: &ViewportConfig) -> ViewWindow {
    match focus.and_then(|id| layout.zone(id)) {
        Some(zone) => focused_view(&zone.rect, config),
        None => {
            if let Some(id) = focus {
                tracing::debug!("Focus target {} no longer exists, using full view", id);
            }
            full_view(layout, config)
        }
    }
}

/// A window frozen at drag start.
///
/// The scale used to turn pointer pixels into floor units must not change
/// while the drag itself changes the layout's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockedView {
    window: ViewWindow,
}

impl LockedView {
    pub fn freeze(window: ViewWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &ViewWindow {
        &self.window
    }

    /// Floor delta for a pointer movement of `delta` pixels on a canvas
    /// rendered at `rendered` pixels.
    pub fn to_floor_delta(&self, delta: Delta<Device>, rendered: DeviceSize) -> Delta<Floor> {
        self.window.device_delta_to_floor(delta, rendered)
    }
}

/// Animated change from one window to another, eased in-out cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransition {
    from: ViewWindow,
    to: ViewWindow,
    duration_ms: u64,
}

impl ZoomTransition {
    pub fn new(from: ViewWindow, to: ViewWindow, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            duration_ms,
        }
    }

    pub fn target(&self) -> &ViewWindow {
        &self.to
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Window to render `elapsed_ms` after the transition started.
    pub fn at(&self, elapsed_ms: u64) -> ViewWindow {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        let t = elapsed_ms as f64 / self.duration_ms as f64;
        self.from.lerp(&self.to, ease_in_out_cubic(t))
    }
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
