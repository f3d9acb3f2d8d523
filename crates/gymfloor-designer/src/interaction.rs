//! Pointer interaction state machine.
//!
//! `Idle → Dragging` on pointer-down over a handle allowed in the current edit
//! mode; every pointer move turns the device delta into a snapped document
//! update; pointer-up returns to `Idle` and the last snapped state stands.

use crate::commands::LayoutAction;
use crate::limits::SizeLimits;
use crate::snapping::{
    aspect_locked_resize, clamp_axis, snap_machine_move, snap_machine_resize, snap_move,
    snap_resize, snap_resize_axis, ReferenceLines, SnapConfig,
};
use crate::viewport::LockedView;
use gymfloor_core::{Dimensions, DevicePoint, DeviceSize, FloorRect, Layout, ZoneRect};
use std::fmt;
use std::str::FromStr;

/// Which entities accept pointer drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Zones move and resize
    #[default]
    Layout,
    /// Room edges and annexes
    Room,
    /// Machines of the selected zone
    Machine,
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout => write!(f, "layout"),
            Self::Room => write!(f, "room"),
            Self::Machine => write!(f, "machine"),
        }
    }
}

impl FromStr for EditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "layout" | "zones" => Ok(Self::Layout),
            "room" => Ok(Self::Room),
            "machine" | "machines" => Ok(Self::Machine),
            _ => Err(format!("Unknown edit mode: {}", s)),
        }
    }
}

/// Keyboard modifiers held during a pointer or key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    /// Cmd on macOS
    pub meta: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    /// Ctrl or Cmd.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Room resize grip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomHandle {
    Right,
    Bottom,
    Corner,
}

impl RoomHandle {
    pub fn affects_width(self) -> bool {
        matches!(self, RoomHandle::Right | RoomHandle::Corner)
    }

    pub fn affects_height(self) -> bool {
        matches!(self, RoomHandle::Bottom | RoomHandle::Corner)
    }
}

/// What the pointer went down on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragHandle {
    ZoneBody(String),
    ZoneResize(String),
    Room(RoomHandle),
    AnnexBody(String),
    AnnexResize(String),
    MachineBody { zone_id: String, machine_id: String },
    MachineResize { zone_id: String, machine_id: String },
}

impl DragHandle {
    /// Edit mode in which this handle is active.
    pub fn required_mode(&self) -> EditMode {
        match self {
            DragHandle::ZoneBody(_) | DragHandle::ZoneResize(_) => EditMode::Layout,
            DragHandle::Room(_) | DragHandle::AnnexBody(_) | DragHandle::AnnexResize(_) => {
                EditMode::Room
            }
            DragHandle::MachineBody { .. } | DragHandle::MachineResize { .. } => EditMode::Machine,
        }
    }
}

/// Active drag, with the target's geometry captured at pointer-down.
#[derive(Debug, Clone, PartialEq)]
pub enum DragKind {
    MoveZone {
        zone_id: String,
        initial: FloorRect,
    },
    ResizeZone {
        zone_id: String,
        initial: FloorRect,
    },
    ResizeRoom {
        handle: RoomHandle,
        initial: Dimensions,
    },
    MoveAnnex {
        annex_id: String,
        initial: FloorRect,
    },
    ResizeAnnex {
        annex_id: String,
        initial: FloorRect,
    },
    MoveMachine {
        zone_id: String,
        machine_id: String,
        initial: ZoneRect,
    },
    ResizeMachine {
        zone_id: String,
        machine_id: String,
        initial: ZoneRect,
    },
}

impl DragKind {
    /// Capture the target of `handle` in `layout`. `None` if the id is stale.
    pub fn capture(handle: &DragHandle, layout: &Layout) -> Option<DragKind> {
        let kind = match handle {
            DragHandle::ZoneBody(id) => DragKind::MoveZone {
                zone_id: id.clone(),
                initial: layout.zone(id)?.rect,
            },
            DragHandle::ZoneResize(id) => DragKind::ResizeZone {
                zone_id: id.clone(),
                initial: layout.zone(id)?.rect,
            },
            DragHandle::Room(handle) => DragKind::ResizeRoom {
                handle: *handle,
                initial: layout.dimensions,
            },
            DragHandle::AnnexBody(id) => DragKind::MoveAnnex {
                annex_id: id.clone(),
                initial: layout.annex(id)?.rect,
            },
            DragHandle::AnnexResize(id) => DragKind::ResizeAnnex {
                annex_id: id.clone(),
                initial: layout.annex(id)?.rect,
            },
            DragHandle::MachineBody {
                zone_id,
                machine_id,
            } => DragKind::MoveMachine {
                zone_id: zone_id.clone(),
                machine_id: machine_id.clone(),
                initial: layout.machine(zone_id, machine_id)?.rect,
            },
            DragHandle::MachineResize {
                zone_id,
                machine_id,
            } => DragKind::ResizeMachine {
                zone_id: zone_id.clone(),
                machine_id: machine_id.clone(),
                initial: layout.machine(zone_id, machine_id)?.rect,
            },
        };
        Some(kind)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DragKind::MoveZone { .. } => "move-zone",
            DragKind::ResizeZone { .. } => "resize-zone",
            DragKind::ResizeRoom { .. } => "resize-room",
            DragKind::MoveAnnex { .. } => "move-annex",
            DragKind::ResizeAnnex { .. } => "resize-annex",
            DragKind::MoveMachine { .. } => "move-machine",
            DragKind::ResizeMachine { .. } => "resize-machine",
        }
    }

    /// Id of the dragged entity; `"room"` for the room.
    pub fn target_id(&self) -> &str {
        match self {
            DragKind::MoveZone { zone_id, .. } | DragKind::ResizeZone { zone_id, .. } => {
                zone_id.as_str()
            }
            DragKind::ResizeRoom { .. } => "room",
            DragKind::MoveAnnex { annex_id, .. } | DragKind::ResizeAnnex { annex_id, .. } => {
                annex_id.as_str()
            }
            DragKind::MoveMachine { machine_id, .. }
            | DragKind::ResizeMachine { machine_id, .. } => machine_id.as_str(),
        }
    }

    /// Reference lines a drag of this kind snaps against.
    fn reference_lines(&self, layout: &Layout) -> ReferenceLines {
        match self {
            DragKind::MoveZone { .. } | DragKind::ResizeZone { .. } => {
                ReferenceLines::for_layout(layout, None)
            }
            DragKind::ResizeRoom { .. } => ReferenceLines::for_room_resize(layout),
            DragKind::MoveAnnex { annex_id, .. } | DragKind::ResizeAnnex { annex_id, .. } => {
                ReferenceLines::for_layout(layout, Some(annex_id.as_str()))
            }
            DragKind::MoveMachine { .. } | DragKind::ResizeMachine { .. } => {
                ReferenceLines::default()
            }
        }
    }
}

/// State held between pointer-down and pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    kind: DragKind,
    start: DevicePoint,
    locked: LockedView,
    lines: ReferenceLines,
}

impl DragSession {
    pub fn new(kind: DragKind, start: DevicePoint, locked: LockedView, layout: &Layout) -> Self {
        let lines = kind.reference_lines(layout);
        Self {
            kind,
            start,
            locked,
            lines,
        }
    }

    pub fn kind(&self) -> &DragKind {
        &self.kind
    }

    pub fn locked_view(&self) -> &LockedView {
        &self.locked
    }

    pub fn reference_lines(&self) -> &ReferenceLines {
        &self.lines
    }

    /// Document update for the pointer now at `pointer`.
    ///
    /// Geometry is always recomputed from the captured initial state, so
    /// updates do not accumulate rounding. `None` when the target is gone.
    pub fn action_for(
        &self,
        layout: &Layout,
        pointer: DevicePoint,
        rendered: DeviceSize,
        modifiers: Modifiers,
        snap: &SnapConfig,
        limits: &SizeLimits,
    ) -> Option<LayoutAction> {
        let delta = self
            .locked
            .to_floor_delta(self.start.delta_to(&pointer), rendered);

        let action = match &self.kind {
            DragKind::MoveZone { zone_id, initial } => {
                let snapped = snap_move(initial.translate(delta), &self.lines, snap);
                let extent = layout.floor_extent();
                let rect = snapped.with_origin(
                    clamp_axis(snapped.x, extent.x, extent.right() - snapped.width),
                    clamp_axis(snapped.y, extent.y, extent.bottom() - snapped.height),
                );
                LayoutAction::SetZoneRect {
                    zone_id: zone_id.clone(),
                    rect,
                }
            }
            DragKind::ResizeZone { zone_id, initial } => {
                let rect = if modifiers.shift {
                    aspect_locked_resize(*initial, delta, snap.grid_size, limits.zone_min)
                } else {
                    snap_resize(*initial, delta, &self.lines, snap, limits.zone_min)
                };
                LayoutAction::SetZoneRect {
                    zone_id: zone_id.clone(),
                    rect,
                }
            }
            DragKind::ResizeRoom { handle, initial } => {
                let resize = |size: f64, lines: &[f64]| {
                    limits.clamp_room(snap_resize_axis(0.0, size, lines, snap, limits.room_min))
                };
                let width = if handle.affects_width() {
                    resize(initial.width + delta.dx, &self.lines.vertical)
                } else {
                    initial.width
                };
                let height = if handle.affects_height() {
                    resize(initial.height + delta.dy, &self.lines.horizontal)
                } else {
                    initial.height
                };
                LayoutAction::SetDimensions(Dimensions::new(width, height))
            }
            DragKind::MoveAnnex { annex_id, initial } => LayoutAction::SetAnnexRect {
                annex_id: annex_id.clone(),
                rect: snap_move(initial.translate(delta), &self.lines, snap),
            },
            DragKind::ResizeAnnex { annex_id, initial } => LayoutAction::SetAnnexRect {
                annex_id: annex_id.clone(),
                rect: snap_resize(*initial, delta, &self.lines, snap, limits.annex_min),
            },
            DragKind::MoveMachine {
                zone_id,
                machine_id,
                initial,
            } => {
                let zone = layout.zone(zone_id)?;
                LayoutAction::SetMachineRect {
                    zone_id: zone_id.clone(),
                    machine_id: machine_id.clone(),
                    rect: snap_machine_move(
                        *initial,
                        delta.to_zone_local(),
                        zone.rect.width,
                        zone.rect.height,
                        snap.grid_size,
                    ),
                }
            }
            DragKind::ResizeMachine {
                zone_id,
                machine_id,
                initial,
            } => {
                let zone = layout.zone(zone_id)?;
                LayoutAction::SetMachineRect {
                    zone_id: zone_id.clone(),
                    machine_id: machine_id.clone(),
                    rect: snap_machine_resize(
                        *initial,
                        delta.to_zone_local(),
                        zone.rect.width,
                        zone.rect.height,
                        snap.grid_size,
                        limits.machine_min,
                    ),
                }
            }
        };
        Some(action)
    }
}

/// Pointer interaction state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl Interaction {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Interaction::Dragging(session) => Some(session),
            Interaction::Idle => None,
        }
    }
}
