//! Two-phase property edits.
//!
//! Focusing a field is the gesture: `begin_edit` snapshots once, each
//! keystroke goes through `apply_edit` as a live update, `end_edit` closes it.
//! Typing a whole word therefore undoes in one step.

use super::Editor;
use crate::commands::{FieldEdit, LayoutAction};

impl Editor {
    /// A property field gained focus.
    pub fn begin_edit(&mut self) {
        if self.editing_field || self.interaction.is_dragging() {
            return;
        }
        self.history.snapshot();
        self.editing_field = true;
    }

    /// Apply one keystroke's worth of change.
    ///
    /// Values below the field's minimum are clamped. Outside a
    /// `begin_edit`/`end_edit` pair the edit records its own undo step.
    pub fn apply_edit(&mut self, edit: FieldEdit) -> bool {
        let record = !self.editing_field;
        self.dispatch(LayoutAction::Edit(edit), record)
    }

    /// The field lost focus. An edit that changed nothing leaves no undo step.
    pub fn end_edit(&mut self) {
        if !self.editing_field {
            return;
        }
        self.editing_field = false;
        self.history.discard_if_unchanged();
    }
}
