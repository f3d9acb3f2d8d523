//! Adding and deleting zones, machines and annexes.
//!
//! Adds record history immediately. Deletes are two-phase: `request_delete_*`
//! returns a [`PendingDelete`] token the caller confirms with
//! [`Editor::confirm_delete`]; dropping the token declines and leaves no trace.

use super::Editor;
use crate::commands::LayoutAction;
use crate::snapping::clamp_axis;
use gymfloor_core::{Annex, FloorRect, Machine, Zone, ZoneRect, ZoneType};
use uuid::Uuid;

const NEW_ZONE_SIZE: f64 = 100.0;
const NEW_ZONE_COLOR: &str = "#94a3b8";
const CORRIDOR_COLOR: &str = "#64748b";
const NEW_MACHINE_SIZE: f64 = 40.0;
const NEW_ANNEX_SIZE: f64 = 200.0;

/// Entity a pending delete would remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Zone(String),
    Machine { zone_id: String, machine_id: String },
    Annex(String),
}

/// Delete awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a delete only happens once confirmed with Editor::confirm_delete"]
pub struct PendingDelete {
    target: DeleteTarget,
    /// Display name for the confirmation prompt
    label: String,
}

impl PendingDelete {
    pub fn target(&self) -> &DeleteTarget {
        &self.target
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

impl Editor {
    /// Append a "New Area" zone near the top-left of the room and select it.
    pub fn add_zone(&mut self) -> String {
        let dims = self.layout().dimensions;
        let x = 100f64.min(dims.width / 2.0 - NEW_ZONE_SIZE / 2.0);
        let y = 100f64.min(dims.height / 2.0 - NEW_ZONE_SIZE / 2.0);
        let zone = Zone::new(
            new_id("zone"),
            "New Area",
            ZoneType::Functional,
            FloorRect::new(x, y, NEW_ZONE_SIZE, NEW_ZONE_SIZE),
            NEW_ZONE_COLOR,
        )
        .with_icon("Square");
        self.insert_zone(zone)
    }

    /// Append a corridor (structural zone) and select it.
    pub fn add_corridor(&mut self) -> String {
        let zone = Zone::new(
            new_id("corridor"),
            "Corridor",
            ZoneType::Corridor,
            FloorRect::new(50.0, 50.0, 200.0, 40.0),
            CORRIDOR_COLOR,
        )
        .with_icon("Footprints")
        .with_description("Main walkway");
        self.insert_zone(zone)
    }

    fn insert_zone(&mut self, zone: Zone) -> String {
        let id = zone.id.clone();
        tracing::debug!("Adding zone {} ({})", id, zone.kind);
        self.dispatch(LayoutAction::AddZone(zone), true);
        self.selection.select_zone(&id);
        self.publish_selection();
        id
    }

    /// Append a machine to `zone_id`, sized and placed to fit inside the zone.
    ///
    /// Returns the new id, or `None` if the zone no longer exists.
    pub fn add_machine(&mut self, zone_id: &str) -> Option<String> {
        let zone = self.layout().zone(zone_id)?;
        let min = self.config.limits.machine_min;
        let width = NEW_MACHINE_SIZE.min(zone.rect.width).max(min);
        let height = NEW_MACHINE_SIZE.min(zone.rect.height).max(min);
        let rect = ZoneRect::new(
            clamp_axis(10.0, 0.0, zone.rect.width - width),
            clamp_axis(10.0, 0.0, zone.rect.height - height),
            width,
            height,
        );
        let machine = Machine::new(new_id("machine"), "New Machine", rect);
        let id = machine.id.clone();
        self.dispatch(
            LayoutAction::AddMachine {
                zone_id: zone_id.to_string(),
                machine,
            },
            true,
        );
        self.selection.select_machine(zone_id, &id);
        self.publish_selection();
        Some(id)
    }

    /// Append a 200×200 annex against the room's right edge.
    pub fn add_annex(&mut self) -> String {
        let dims = self.layout().dimensions;
        let annex = Annex::new(
            new_id("annex"),
            FloorRect::new(dims.width, 0.0, NEW_ANNEX_SIZE, NEW_ANNEX_SIZE),
        );
        let id = annex.id.clone();
        self.dispatch(LayoutAction::AddAnnex(annex), true);
        self.selection.select_annex(&id);
        self.publish_selection();
        id
    }

    pub fn request_delete_zone(&self, zone_id: &str) -> Option<PendingDelete> {
        let zone = self.layout().zone(zone_id)?;
        Some(PendingDelete {
            target: DeleteTarget::Zone(zone_id.to_string()),
            label: zone.name.clone(),
        })
    }

    pub fn request_delete_machine(&self, zone_id: &str, machine_id: &str) -> Option<PendingDelete> {
        let machine = self.layout().machine(zone_id, machine_id)?;
        Some(PendingDelete {
            target: DeleteTarget::Machine {
                zone_id: zone_id.to_string(),
                machine_id: machine_id.to_string(),
            },
            label: machine.name.clone(),
        })
    }

    pub fn request_delete_annex(&self, annex_id: &str) -> Option<PendingDelete> {
        self.layout().annex(annex_id)?;
        Some(PendingDelete {
            target: DeleteTarget::Annex(annex_id.to_string()),
            label: "Annex".to_string(),
        })
    }

    /// Delete of whatever is selected in the current mode.
    pub fn request_delete_selected(&self) -> Option<PendingDelete> {
        use crate::interaction::EditMode;
        match self.mode {
            EditMode::Machine => {
                let zone_id = self.selection.zone_id()?;
                self.request_delete_machine(zone_id, self.selection.machine_id()?)
            }
            EditMode::Layout => self.request_delete_zone(self.selection.zone_id()?),
            EditMode::Room => self.request_delete_annex(self.selection.annex_id()?),
        }
    }

    /// Carry out a confirmed delete as one recorded step.
    ///
    /// A zone goes together with its machines. Returns false if the target
    /// disappeared since the request (e.g. after an undo).
    pub fn confirm_delete(&mut self, pending: PendingDelete) -> bool {
        let action = match pending.target {
            DeleteTarget::Zone(id) => LayoutAction::DeleteZone(id),
            DeleteTarget::Machine {
                zone_id,
                machine_id,
            } => LayoutAction::DeleteMachine {
                zone_id,
                machine_id,
            },
            DeleteTarget::Annex(id) => LayoutAction::DeleteAnnex(id),
        };
        tracing::debug!("Confirmed {} of {}", action.name(), pending.label);
        self.dispatch(action, true)
    }
}
