//! Layout actions and the reducer that applies them.
//!
//! `apply(layout, action)` returns the next document, or `None` when the
//! action is a no-op: the target id is stale, or nothing would change.
//! Callers record history only for `Some`.

use crate::limits::SizeLimits;
use gymfloor_core::{
    Annex, Dimensions, EntranceSide, FloorRect, Layout, LayoutError, Machine, Zone, ZoneRect,
    ZoneType,
};

/// Editable property of the layout document itself.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutField {
    Name(String),
    FloorColor(String),
    RoomWidth(f64),
    RoomHeight(f64),
    EntranceSide(EntranceSide),
    /// Percent along the side, clamped to 0–100
    EntranceOffset(f64),
    EntranceWidth(f64),
}

/// Editable property of a zone.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneField {
    Name(String),
    Description(String),
    Kind(ZoneType),
    Color(String),
    Icon(String),
    X(f64),
    Y(f64),
    Width(f64),
    Height(f64),
}

/// Editable property of a machine.
#[derive(Debug, Clone, PartialEq)]
pub enum MachineField {
    Name(String),
    X(f64),
    Y(f64),
    Width(f64),
    Height(f64),
}

/// Editable property of an annex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnnexField {
    X(f64),
    Y(f64),
    Width(f64),
    Height(f64),
}

/// A single property-panel edit.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Layout(LayoutField),
    Zone {
        zone_id: String,
        field: ZoneField,
    },
    Machine {
        zone_id: String,
        machine_id: String,
        field: MachineField,
    },
    Annex {
        annex_id: String,
        field: AnnexField,
    },
}

/// Document mutation dispatched to the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutAction {
    AddZone(Zone),
    DeleteZone(String),
    SetZoneRect {
        zone_id: String,
        rect: FloorRect,
    },
    AddMachine {
        zone_id: String,
        machine: Machine,
    },
    DeleteMachine {
        zone_id: String,
        machine_id: String,
    },
    SetMachineRect {
        zone_id: String,
        machine_id: String,
        rect: ZoneRect,
    },
    AddAnnex(Annex),
    DeleteAnnex(String),
    SetAnnexRect {
        annex_id: String,
        rect: FloorRect,
    },
    SetDimensions(Dimensions),
    Edit(FieldEdit),
}

impl LayoutAction {
    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutAction::AddZone(_) => "add_zone",
            LayoutAction::DeleteZone(_) => "delete_zone",
            LayoutAction::SetZoneRect { .. } => "set_zone_rect",
            LayoutAction::AddMachine { .. } => "add_machine",
            LayoutAction::DeleteMachine { .. } => "delete_machine",
            LayoutAction::SetMachineRect { .. } => "set_machine_rect",
            LayoutAction::AddAnnex(_) => "add_annex",
            LayoutAction::DeleteAnnex(_) => "delete_annex",
            LayoutAction::SetAnnexRect { .. } => "set_annex_rect",
            LayoutAction::SetDimensions(_) => "set_dimensions",
            LayoutAction::Edit(_) => "edit",
        }
    }
}

/// Apply `action` to `layout`.
pub fn apply(layout: &Layout, action: &LayoutAction, limits: &SizeLimits) -> Option<Layout> {
    let result = match action {
        LayoutAction::AddZone(zone) => Ok(layout.with_zone_added(zone.clone())),
        LayoutAction::DeleteZone(id) => layout.without_zone(id),
        LayoutAction::SetZoneRect { zone_id, rect } => {
            layout.map_zone(zone_id, |z| z.with_rect(*rect))
        }
        LayoutAction::AddMachine { zone_id, machine } => {
            layout.with_machine_added(zone_id, machine.clone())
        }
        LayoutAction::DeleteMachine {
            zone_id,
            machine_id,
        } => layout.without_machine(zone_id, machine_id),
        LayoutAction::SetMachineRect {
            zone_id,
            machine_id,
            rect,
        } => layout.map_machine(zone_id, machine_id, |_, m| m.with_rect(*rect)),
        LayoutAction::AddAnnex(annex) => Ok(layout.with_annex_added(annex.clone())),
        LayoutAction::DeleteAnnex(id) => layout.without_annex(id),
        LayoutAction::SetAnnexRect { annex_id, rect } => {
            layout.map_annex(annex_id, |a| a.with_rect(*rect))
        }
        LayoutAction::SetDimensions(dimensions) => Ok(layout.with_dimensions(*dimensions)),
        LayoutAction::Edit(edit) => apply_edit(layout, edit, limits),
    };

    match result {
        Ok(next) if next == *layout => None,
        Ok(next) => Some(next),
        Err(err) => {
            tracing::debug!("Ignoring {} on stale target: {}", action.name(), err);
            None
        }
    }
}

fn apply_edit(
    layout: &Layout,
    edit: &FieldEdit,
    limits: &SizeLimits,
) -> Result<Layout, LayoutError> {
    if let Some(value) = numeric_value(edit) {
        if !value.is_finite() {
            return Err(LayoutError::other(format!("non-finite value {}", value)));
        }
    }

    match edit {
        FieldEdit::Layout(field) => Ok(apply_layout_field(layout, field, limits)),
        FieldEdit::Zone { zone_id, field } => layout.map_zone(zone_id, |z| {
            let mut zone = z.clone();
            match field {
                ZoneField::Name(v) => zone.name = v.clone(),
                ZoneField::Description(v) => zone.description = v.clone(),
                ZoneField::Kind(v) => zone.kind = *v,
                ZoneField::Color(v) => zone.color = v.clone(),
                ZoneField::Icon(v) => zone.icon = v.clone(),
                ZoneField::X(v) => zone.rect.x = *v,
                ZoneField::Y(v) => zone.rect.y = *v,
                ZoneField::Width(v) => zone.rect.width = v.max(limits.field_min),
                ZoneField::Height(v) => zone.rect.height = v.max(limits.field_min),
            }
            zone
        }),
        FieldEdit::Machine {
            zone_id,
            machine_id,
            field,
        } => layout.map_machine(zone_id, machine_id, |_, m| {
            let mut machine = m.clone();
            match field {
                MachineField::Name(v) => machine.name = v.clone(),
                MachineField::X(v) => machine.rect.x = *v,
                MachineField::Y(v) => machine.rect.y = *v,
                MachineField::Width(v) => machine.rect.width = v.max(limits.machine_min),
                MachineField::Height(v) => machine.rect.height = v.max(limits.machine_min),
            }
            machine
        }),
        FieldEdit::Annex { annex_id, field } => layout.map_annex(annex_id, |a| {
            let rect = match *field {
                AnnexField::X(v) => a.rect.with_origin(v, a.rect.y),
                AnnexField::Y(v) => a.rect.with_origin(a.rect.x, v),
                AnnexField::Width(v) => a.rect.with_size(v.max(limits.annex_min), a.rect.height),
                AnnexField::Height(v) => a.rect.with_size(a.rect.width, v.max(limits.annex_min)),
            };
            a.with_rect(rect)
        }),
    }
}

fn apply_layout_field(layout: &Layout, field: &LayoutField, limits: &SizeLimits) -> Layout {
    match field {
        LayoutField::Name(v) => layout.with_name(v.clone()),
        LayoutField::FloorColor(v) => layout.with_floor_color(v.clone()),
        LayoutField::RoomWidth(v) => layout.with_dimensions(Dimensions::new(
            limits.clamp_room(*v),
            layout.dimensions.height,
        )),
        LayoutField::RoomHeight(v) => layout.with_dimensions(Dimensions::new(
            layout.dimensions.width,
            limits.clamp_room(*v),
        )),
        LayoutField::EntranceSide(side) => {
            let mut entrance = layout.entrance;
            entrance.side = *side;
            layout.with_entrance(entrance)
        }
        LayoutField::EntranceOffset(v) => {
            let mut entrance = layout.entrance;
            entrance.offset = v.max(0.0).min(100.0);
            layout.with_entrance(entrance)
        }
        LayoutField::EntranceWidth(v) => {
            let mut entrance = layout.entrance;
            entrance.width = v.max(limits.entrance_min_width);
            layout.with_entrance(entrance)
        }
    }
}

fn numeric_value(edit: &FieldEdit) -> Option<f64> {
    match edit {
        FieldEdit::Layout(
            LayoutField::RoomWidth(v)
            | LayoutField::RoomHeight(v)
            | LayoutField::EntranceOffset(v)
            | LayoutField::EntranceWidth(v),
        ) => Some(*v),
        FieldEdit::Zone {
            field: ZoneField::X(v) | ZoneField::Y(v) | ZoneField::Width(v) | ZoneField::Height(v),
            ..
        } => Some(*v),
        FieldEdit::Machine {
            field:
                MachineField::X(v) | MachineField::Y(v) | MachineField::Width(v) | MachineField::Height(v),
            ..
        } => Some(*v),
        FieldEdit::Annex {
            field: AnnexField::X(v) | AnnexField::Y(v) | AnnexField::Width(v) | AnnexField::Height(v),
            ..
        } => Some(*v),
        _ => None,
    }
}
