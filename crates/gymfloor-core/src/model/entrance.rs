//! Room dimensions and the entrance marker.

use crate::constants::{DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH};
use crate::units::{FloorPoint, FloorRect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Main-room size. The room always sits at the floor origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> FloorRect {
        FloorRect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_HEIGHT)
    }
}

/// Room side carrying the entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntranceSide {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl fmt::Display for EntranceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl FromStr for EntranceSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(format!("Unknown entrance side: {}", s)),
        }
    }
}

/// The door marker on one side of the main room (never on an annex).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entrance {
    pub side: EntranceSide,
    /// Position along the side, 0–100 percent.
    pub offset: f64,
    pub width: f64,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            side: EntranceSide::Bottom,
            offset: 50.0,
            width: 80.0,
        }
    }
}

impl Entrance {
    /// Endpoints of the door segment in floor coordinates.
    ///
    /// The segment is `width` long and centred at `offset` percent along the side.
    pub fn door_segment(&self, room: &Dimensions) -> (FloorPoint, FloorPoint) {
        let pos = self.offset / 100.0;
        let half = self.width / 2.0;
        match self.side {
            EntranceSide::Top | EntranceSide::Bottom => {
                let y = if self.side == EntranceSide::Top {
                    0.0
                } else {
                    room.height
                };
                let x1 = room.width * pos - half;
                (FloorPoint::new(x1, y), FloorPoint::new(x1 + self.width, y))
            }
            EntranceSide::Left | EntranceSide::Right => {
                let x = if self.side == EntranceSide::Left {
                    0.0
                } else {
                    room.width
                };
                let y1 = room.height * pos - half;
                (FloorPoint::new(x, y1), FloorPoint::new(x, y1 + self.width))
            }
        }
    }
}
