//! Read-only viewer with focus zoom.
//!
//! Clicking a zone zooms in on it; clicking the focused zone again opens its
//! exercise selector; clicking a machine inside the focused zone opens its
//! detail; clicking the background zooms back out. Structural zones
//! (corridors, facilities) never take focus.
//!
//! Focus changes take `elapsed_ms`, the time since the previous focus change
//! (the same clock passed to [`ViewerState::frame`]), so a click during a
//! running zoom starts the next one from the frame currently on screen.

use crate::viewport::{view_for, ViewWindow, ViewportConfig, ZoomTransition};
use gymfloor_core::Layout;

/// Panel shown on top of the map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerOverlay {
    #[default]
    None,
    ExerciseSelector {
        zone_id: String,
    },
    MachineDetail {
        zone_id: String,
        machine_id: String,
    },
}

/// Viewer focus, overlay and zoom animation state.
#[derive(Debug, Clone)]
pub struct ViewerState {
    focused_zone: Option<String>,
    overlay: ViewerOverlay,
    transition: Option<ZoomTransition>,
    config: ViewportConfig,
}

impl ViewerState {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            focused_zone: None,
            overlay: ViewerOverlay::None,
            transition: None,
            config,
        }
    }

    pub fn focused_zone(&self) -> Option<&str> {
        self.focused_zone.as_deref()
    }

    pub fn overlay(&self) -> &ViewerOverlay {
        &self.overlay
    }

    pub fn transition(&self) -> Option<&ZoomTransition> {
        self.transition.as_ref()
    }

    /// Target window for the current focus. A focused zone that no longer
    /// exists falls back to the full view.
    pub fn window(&self, layout: &Layout) -> ViewWindow {
        view_for(layout, self.focused_zone.as_deref(), &self.config)
    }

    /// Window to draw `elapsed_ms` after the last focus change.
    pub fn frame(&self, layout: &Layout, elapsed_ms: u64) -> ViewWindow {
        match &self.transition {
            Some(transition) if !transition.is_finished(elapsed_ms) => transition.at(elapsed_ms),
            _ => self.window(layout),
        }
    }

    /// Click on a zone. Returns whether anything changed.
    pub fn click_zone(&mut self, layout: &Layout, zone_id: &str, elapsed_ms: u64) -> bool {
        let Some(zone) = layout.zone(zone_id) else {
            return false;
        };
        if zone.is_structural() {
            return false;
        }
        if self.focused_zone.as_deref() == Some(zone_id) {
            self.overlay = ViewerOverlay::ExerciseSelector {
                zone_id: zone_id.to_string(),
            };
            return true;
        }
        self.refocus(layout, Some(zone_id.to_string()), elapsed_ms);
        true
    }

    /// Click on a machine; only machines of the focused zone respond.
    pub fn click_machine(&mut self, layout: &Layout, zone_id: &str, machine_id: &str) -> bool {
        if self.focused_zone.as_deref() != Some(zone_id)
            || layout.machine(zone_id, machine_id).is_none()
        {
            return false;
        }
        self.overlay = ViewerOverlay::MachineDetail {
            zone_id: zone_id.to_string(),
            machine_id: machine_id.to_string(),
        };
        true
    }

    /// Click on the map background: zoom out and clear focus.
    pub fn click_background(&mut self, layout: &Layout, elapsed_ms: u64) -> bool {
        if self.focused_zone.is_none() && self.overlay == ViewerOverlay::None {
            return false;
        }
        self.overlay = ViewerOverlay::None;
        self.refocus(layout, None, elapsed_ms);
        true
    }

    /// Close the selector or detail panel. Focus is kept.
    pub fn close_overlay(&mut self) {
        self.overlay = ViewerOverlay::None;
    }

    fn refocus(&mut self, layout: &Layout, focus: Option<String>, elapsed_ms: u64) {
        let from = self.frame(layout, elapsed_ms);
        self.focused_zone = focus;
        let to = self.window(layout);
        tracing::debug!("Viewer focus: {:?} ({})", self.focused_zone, to);
        self.transition = Some(ZoomTransition::new(from, to, self.config.transition_ms));
    }
}
