use super::Editor;
use crate::interaction::{DragHandle, DragKind, DragSession, EditMode, Interaction, Modifiers};
use crate::viewport::LockedView;
use gymfloor_core::{DevicePoint, DeviceSize, LayoutEvent};

impl Editor {
    /// Pointer-down on a draggable handle.
    ///
    /// Starts a drag only when the handle belongs to the current edit mode
    /// (machine handles additionally need their zone selected) and the target
    /// still exists. Takes one history snapshot and freezes the current view.
    pub fn begin_drag(&mut self, handle: DragHandle, pointer: DevicePoint) -> bool {
        if !self.can_drag(&handle) {
            tracing::trace!("Ignoring {:?} in {} mode", handle, self.mode);
            return false;
        }
        let Some(kind) = DragKind::capture(&handle, self.layout()) else {
            return false;
        };

        self.end_edit();
        match &kind {
            DragKind::MoveZone { zone_id, .. } | DragKind::ResizeZone { zone_id, .. } => {
                self.selection.select_zone(zone_id);
                self.publish_selection();
            }
            DragKind::MoveMachine {
                zone_id,
                machine_id,
                ..
            }
            | DragKind::ResizeMachine {
                zone_id,
                machine_id,
                ..
            } => {
                self.selection.select_machine(zone_id, machine_id);
                self.publish_selection();
            }
            DragKind::MoveAnnex { annex_id, .. } | DragKind::ResizeAnnex { annex_id, .. } => {
                self.selection.select_annex(annex_id);
                self.publish_selection();
            }
            DragKind::ResizeRoom { .. } => {}
        }

        let locked = LockedView::freeze(self.computed_view());
        self.history.snapshot();
        tracing::debug!("Drag started: {} on {}", kind.label(), kind.target_id());
        self.events.publish(LayoutEvent::DragStarted {
            kind: kind.label().to_string(),
            target_id: kind.target_id().to_string(),
        });
        let session = DragSession::new(kind, pointer, locked, self.layout());
        self.interaction = Interaction::Dragging(session);
        true
    }

    /// Pointer-move during a drag; `rendered` is the canvas size in pixels.
    ///
    /// Updates the present document without recording history.
    pub fn pointer_move(
        &mut self,
        pointer: DevicePoint,
        rendered: DeviceSize,
        modifiers: Modifiers,
    ) -> bool {
        let Interaction::Dragging(session) = &self.interaction else {
            return false;
        };
        let action = session.action_for(
            self.history.present(),
            pointer,
            rendered,
            modifiers,
            &self.config.snap,
            &self.config.limits,
        );
        match action {
            Some(action) => self.dispatch(action, false),
            None => false,
        }
    }

    /// Pointer-up: end the drag. The last snapped state stands.
    ///
    /// A drag that changed nothing drops its snapshot so a plain click does
    /// not leave an empty undo step.
    pub fn pointer_up(&mut self) -> bool {
        if !self.interaction.is_dragging() {
            return false;
        }
        self.interaction = Interaction::Idle;
        if self.history.discard_if_unchanged() {
            tracing::debug!("Drag ended without changes");
        } else {
            tracing::debug!("Drag ended");
        }
        self.events.publish(LayoutEvent::DragEnded);
        true
    }

    /// Whether `handle` would start a drag right now.
    pub fn can_drag(&self, handle: &DragHandle) -> bool {
        if self.interaction.is_dragging() || handle.required_mode() != self.mode {
            return false;
        }
        if self.mode == EditMode::Machine {
            if let DragHandle::MachineBody { zone_id, .. } | DragHandle::MachineResize { zone_id, .. } =
                handle
            {
                if self.selection.zone_id() != Some(zone_id.as_str()) {
                    return false;
                }
            }
        }
        DragKind::capture(handle, self.layout()).is_some()
    }
}
