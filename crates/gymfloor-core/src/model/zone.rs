//! Zones, the machines they own, and annexes.

use crate::units::{FloorPoint, FloorRect, ZoneRect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of equipment area.
///
/// Serialized with the display strings used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoneType {
    #[serde(rename = "Cardio")]
    Cardio,
    #[serde(rename = "Free Weights")]
    FreeWeights,
    #[serde(rename = "Machine")]
    Machine,
    #[serde(rename = "Power Rack")]
    Rack,
    #[default]
    #[serde(rename = "Functional")]
    Functional,
    #[serde(rename = "Corridor")]
    Corridor,
    #[serde(rename = "Facility")]
    Facility,
}

impl ZoneType {
    pub const ALL: [ZoneType; 7] = [
        ZoneType::Cardio,
        ZoneType::FreeWeights,
        ZoneType::Machine,
        ZoneType::Rack,
        ZoneType::Functional,
        ZoneType::Corridor,
        ZoneType::Facility,
    ];

    /// Corridors and facilities are structural: no equipment placeholder and
    /// no machine-detail zoom.
    pub fn is_structural(self) -> bool {
        matches!(self, ZoneType::Corridor | ZoneType::Facility)
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoneType::Cardio => "Cardio",
            ZoneType::FreeWeights => "Free Weights",
            ZoneType::Machine => "Machine",
            ZoneType::Rack => "Power Rack",
            ZoneType::Functional => "Functional",
            ZoneType::Corridor => "Corridor",
            ZoneType::Facility => "Facility",
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ZoneType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "cardio" => Ok(ZoneType::Cardio),
            "free weights" | "freeweights" => Ok(ZoneType::FreeWeights),
            "machine" => Ok(ZoneType::Machine),
            "power rack" | "rack" => Ok(ZoneType::Rack),
            "functional" => Ok(ZoneType::Functional),
            "corridor" => Ok(ZoneType::Corridor),
            "facility" => Ok(ZoneType::Facility),
            _ => Err(format!("Unknown zone type: {}", s)),
        }
    }
}

/// An individual equipment item. Its rectangle is relative to the owning zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub rect: ZoneRect,
}

impl Machine {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rect: ZoneRect) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rect,
        }
    }

    pub fn with_rect(&self, rect: ZoneRect) -> Self {
        Self {
            rect,
            ..self.clone()
        }
    }
}

/// A named rectangular equipment area, floor-absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ZoneType,
    #[serde(flatten)]
    pub rect: FloorRect,
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub machines: Vec<Machine>,
}

impl Zone {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ZoneType,
        rect: FloorRect,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            rect,
            color: color.into(),
            description: String::new(),
            icon: String::new(),
            machines: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_machines(mut self, machines: Vec<Machine>) -> Self {
        self.machines = machines;
        self
    }

    pub fn with_rect(&self, rect: FloorRect) -> Self {
        Self {
            rect,
            ..self.clone()
        }
    }

    pub fn is_structural(&self) -> bool {
        self.kind.is_structural()
    }

    pub fn machine(&self, machine_id: &str) -> Option<&Machine> {
        self.machines.iter().find(|m| m.id == machine_id)
    }

    pub fn has_machine(&self, machine_id: &str) -> bool {
        self.machine(machine_id).is_some()
    }

    /// The zone's own extent in its local space, `(0, 0, width, height)`.
    pub fn local_bounds(&self) -> ZoneRect {
        ZoneRect::new(0.0, 0.0, self.rect.width, self.rect.height)
    }

    /// Floor-absolute rectangle of one of this zone's machines.
    pub fn machine_floor_rect(&self, machine: &Machine) -> FloorRect {
        machine
            .rect
            .to_floor(FloorPoint::new(self.rect.x, self.rect.y))
    }
}

/// A rectangular extension bolted onto the main room, floor-absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annex {
    pub id: String,
    #[serde(flatten)]
    pub rect: FloorRect,
}

impl Annex {
    pub fn new(id: impl Into<String>, rect: FloorRect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }

    pub fn with_rect(&self, rect: FloorRect) -> Self {
        Self {
            id: self.id.clone(),
            rect,
        }
    }
}
