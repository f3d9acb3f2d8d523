//! Minimum/maximum sizes enforced by resize drags and property fields.

use gymfloor_core::constants::{
    MAX_ROOM_SIZE, MIN_ANNEX_SIZE, MIN_ENTRANCE_WIDTH, MIN_FIELD_SIZE, MIN_MACHINE_SIZE,
    MIN_ROOM_SIZE, MIN_ZONE_SIZE,
};
use gymfloor_core::{Dimensions, Layout, Rect};
use serde::{Deserialize, Serialize};

/// Size limits per entity kind, in floor units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeLimits {
    pub zone_min: f64,
    pub annex_min: f64,
    pub machine_min: f64,
    pub room_min: f64,
    pub room_max: f64,
    /// Minimum zone width/height typed into a property field
    pub field_min: f64,
    pub entrance_min_width: f64,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            zone_min: MIN_ZONE_SIZE,
            annex_min: MIN_ANNEX_SIZE,
            machine_min: MIN_MACHINE_SIZE,
            room_min: MIN_ROOM_SIZE,
            room_max: MAX_ROOM_SIZE,
            field_min: MIN_FIELD_SIZE,
            entrance_min_width: MIN_ENTRANCE_WIDTH,
        }
    }
}

impl SizeLimits {
    /// Clamp a room length into `[room_min, room_max]`. NaN maps to `room_min`.
    pub fn clamp_room(&self, value: f64) -> f64 {
        value.max(self.room_min).min(self.room_max)
    }

    /// Copy of `layout` with every undersized or non-finite rectangle grown
    /// to its kind's minimum. Non-finite origins move to 0.
    pub fn repair(&self, layout: &Layout) -> Layout {
        let mut repaired = layout.clone();
        repaired.dimensions = Dimensions::new(
            at_least(layout.dimensions.width, self.room_min),
            at_least(layout.dimensions.height, self.room_min),
        );
        for zone in &mut repaired.zones {
            zone.rect = repair_rect(zone.rect, self.zone_min);
            for machine in &mut zone.machines {
                machine.rect = repair_rect(machine.rect, self.machine_min);
            }
        }
        for annex in &mut repaired.annexes {
            annex.rect = repair_rect(annex.rect, self.annex_min);
        }
        repaired
    }
}

fn at_least(value: f64, min: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        min
    }
}

fn repair_rect<S>(rect: Rect<S>, min: f64) -> Rect<S> {
    if rect.is_valid() {
        return rect;
    }
    let origin = |v: f64| if v.is_finite() { v } else { 0.0 };
    Rect::new(
        origin(rect.x),
        origin(rect.y),
        at_least(rect.width, min),
        at_least(rect.height, min),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_room() {
        let limits = SizeLimits::default();
        assert_eq!(limits.clamp_room(50.0), 200.0);
        assert_eq!(limits.clamp_room(5000.0), 2000.0);
        assert_eq!(limits.clamp_room(f64::NAN), 200.0);
        assert_eq!(limits.clamp_room(640.0), 640.0);
    }

    #[test]
    fn test_repair_grows_degenerate_rects_only() {
        use gymfloor_core::{default_layout, FloorRect};

        let limits = SizeLimits::default();
        let broken = default_layout()
            .map_zone("zone-turf", |z| {
                z.with_rect(FloorRect::new(290.0, 40.0, 200.0, 0.0))
            })
            .unwrap()
            .with_dimensions(Dimensions::new(f64::INFINITY, 580.0));
        let repaired = limits.repair(&broken);

        assert!(repaired.validate().is_ok());
        let turf = repaired.zone("zone-turf").unwrap();
        assert_eq!(turf.rect, FloorRect::new(290.0, 40.0, 200.0, 40.0));
        assert_eq!(repaired.dimensions, Dimensions::new(200.0, 580.0));
        assert_eq!(repaired.zones[0], default_layout().zones[0]);
    }
}
