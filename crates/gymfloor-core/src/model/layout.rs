//! The layout document: the unit of undo snapshots and of persistence.
//!
//! Updates are functional. Every `with_*`/`map_*`/`without_*` call returns a
//! new document and leaves `self` untouched, so history can keep full values.
//! Targeted updates fail with a not-found error when the id is stale.

use super::entrance::{Dimensions, Entrance};
use super::zone::{Annex, Machine, Zone};
use crate::constants::DEFAULT_FLOOR_COLOR;
use crate::error::{LayoutError, Result};
use crate::units::FloorRect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_floor_color() -> String {
    DEFAULT_FLOOR_COLOR.to_string()
}

/// A gym floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub entrance: Entrance,
    #[serde(default = "default_floor_color")]
    pub floor_color: String,
    #[serde(default)]
    pub annexes: Vec<Annex>,
}

impl Layout {
    /// Empty layout with the default room, entrance and floor color.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            zones: Vec::new(),
            dimensions: Dimensions::default(),
            entrance: Entrance::default(),
            floor_color: default_floor_color(),
            annexes: Vec::new(),
        }
    }

    /// Fresh "New Location" layout with a generated id.
    pub fn new_location() -> Self {
        Self::new(format!("gym-{}", Uuid::new_v4()), "New Location")
    }

    /// Parse and validate a layout document.
    pub fn from_json(json: &str) -> Result<Self> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // ---- queries ----

    pub fn room_rect(&self) -> FloorRect {
        self.dimensions.rect()
    }

    pub fn zone(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == zone_id)
    }

    pub fn has_zone(&self, zone_id: &str) -> bool {
        self.zone(zone_id).is_some()
    }

    pub fn annex(&self, annex_id: &str) -> Option<&Annex> {
        self.annexes.iter().find(|a| a.id == annex_id)
    }

    pub fn has_annex(&self, annex_id: &str) -> bool {
        self.annex(annex_id).is_some()
    }

    pub fn machine(&self, zone_id: &str, machine_id: &str) -> Option<&Machine> {
        self.zone(zone_id).and_then(|z| z.machine(machine_id))
    }

    /// Bounding box of the main room and all annexes.
    pub fn floor_extent(&self) -> FloorRect {
        self.annexes
            .iter()
            .fold(self.room_rect(), |acc, a| acc.union(&a.rect))
    }

    /// Bounding box of the floor extent plus every zone.
    ///
    /// Zones are normally inside the floor, but nothing enforces it after a
    /// room shrink, so the full view frames them too.
    pub fn content_extent(&self) -> FloorRect {
        self.zones
            .iter()
            .fold(self.floor_extent(), |acc, z| acc.union(&z.rect))
    }

    /// Check the positive-size invariant for every rectangle in the document.
    pub fn validate(&self) -> Result<()> {
        if !self.dimensions.rect().is_valid() {
            return Err(invalid("room", "dimensions must be positive and finite"));
        }
        for zone in &self.zones {
            if !zone.rect.is_valid() {
                return Err(invalid(&format!("zone {}", zone.id), "size must be positive"));
            }
            for machine in &zone.machines {
                if !machine.rect.is_valid() {
                    return Err(invalid(
                        &format!("machine {}", machine.id),
                        "size must be positive",
                    ));
                }
            }
        }
        for annex in &self.annexes {
            if !annex.rect.is_valid() {
                return Err(invalid(&format!("annex {}", annex.id), "size must be positive"));
            }
        }
        Ok(())
    }

    // ---- document-level updates ----

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_floor_color(&self, color: impl Into<String>) -> Self {
        Self {
            floor_color: color.into(),
            ..self.clone()
        }
    }

    pub fn with_dimensions(&self, dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            ..self.clone()
        }
    }

    pub fn with_entrance(&self, entrance: Entrance) -> Self {
        Self {
            entrance,
            ..self.clone()
        }
    }

    // ---- zones ----

    pub fn with_zone_added(&self, zone: Zone) -> Self {
        let mut next = self.clone();
        next.zones.push(zone);
        next
    }

    /// Replace one zone with `f(zone)`.
    pub fn map_zone(&self, zone_id: &str, f: impl FnOnce(&Zone) -> Zone) -> Result<Self> {
        let idx = self.zone_index(zone_id)?;
        let mut next = self.clone();
        next.zones[idx] = f(&self.zones[idx]);
        Ok(next)
    }

    /// Remove a zone together with all of its machines.
    pub fn without_zone(&self, zone_id: &str) -> Result<Self> {
        let idx = self.zone_index(zone_id)?;
        let mut next = self.clone();
        next.zones.remove(idx);
        Ok(next)
    }

    // ---- machines ----

    pub fn with_machine_added(&self, zone_id: &str, machine: Machine) -> Result<Self> {
        self.map_zone(zone_id, |z| {
            let mut zone = z.clone();
            zone.machines.push(machine);
            zone
        })
    }

    /// Replace one machine with `f(zone, machine)`; the owning zone is passed
    /// so callers can clamp against its current size.
    pub fn map_machine(
        &self,
        zone_id: &str,
        machine_id: &str,
        f: impl FnOnce(&Zone, &Machine) -> Machine,
    ) -> Result<Self> {
        let zone_idx = self.zone_index(zone_id)?;
        let zone = &self.zones[zone_idx];
        let machine_idx = machine_index(zone, machine_id)?;
        let updated = f(zone, &zone.machines[machine_idx]);
        let mut next = self.clone();
        next.zones[zone_idx].machines[machine_idx] = updated;
        Ok(next)
    }

    pub fn without_machine(&self, zone_id: &str, machine_id: &str) -> Result<Self> {
        let zone_idx = self.zone_index(zone_id)?;
        let machine_idx = machine_index(&self.zones[zone_idx], machine_id)?;
        let mut next = self.clone();
        next.zones[zone_idx].machines.remove(machine_idx);
        Ok(next)
    }

    // ---- annexes ----

    pub fn with_annex_added(&self, annex: Annex) -> Self {
        let mut next = self.clone();
        next.annexes.push(annex);
        next
    }

    pub fn map_annex(&self, annex_id: &str, f: impl FnOnce(&Annex) -> Annex) -> Result<Self> {
        let idx = self.annex_index(annex_id)?;
        let mut next = self.clone();
        next.annexes[idx] = f(&self.annexes[idx]);
        Ok(next)
    }

    pub fn without_annex(&self, annex_id: &str) -> Result<Self> {
        let idx = self.annex_index(annex_id)?;
        let mut next = self.clone();
        next.annexes.remove(idx);
        Ok(next)
    }

    fn zone_index(&self, zone_id: &str) -> Result<usize> {
        self.zones
            .iter()
            .position(|z| z.id == zone_id)
            .ok_or_else(|| LayoutError::ZoneNotFound {
                id: zone_id.to_string(),
            })
    }

    fn annex_index(&self, annex_id: &str) -> Result<usize> {
        self.annexes
            .iter()
            .position(|a| a.id == annex_id)
            .ok_or_else(|| LayoutError::AnnexNotFound {
                id: annex_id.to_string(),
            })
    }
}

fn machine_index(zone: &Zone, machine_id: &str) -> Result<usize> {
    zone.machines
        .iter()
        .position(|m| m.id == machine_id)
        .ok_or_else(|| LayoutError::MachineNotFound {
            zone_id: zone.id.clone(),
            machine_id: machine_id.to_string(),
        })
}

fn invalid(entity: &str, reason: &str) -> LayoutError {
    LayoutError::InvalidGeometry {
        entity: entity.to_string(),
        reason: reason.to_string(),
    }
}
