use super::{Editor, PendingDelete};
use crate::interaction::Modifiers;
use std::str::FromStr;

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Char(char),
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Delete" => Ok(Key::Delete),
            "Backspace" => Ok(Key::Backspace),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Key::Char(c)),
                    _ => Err(format!("Unsupported key: {}", s)),
                }
            }
        }
    }
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Undone,
    Redone,
    /// Delete of the selected entity awaits confirmation
    ConfirmDelete(PendingDelete),
}

impl Editor {
    /// Handle a key press.
    ///
    /// Shortcuts are suppressed while a property field has focus, so typing
    /// Backspace in a name never deletes a zone.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> KeyOutcome {
        if self.editing_field || self.interaction.is_dragging() {
            return KeyOutcome::Ignored;
        }
        match key {
            Key::Delete | Key::Backspace => match self.request_delete_selected() {
                Some(pending) => KeyOutcome::ConfirmDelete(pending),
                None => KeyOutcome::Ignored,
            },
            Key::Char(c) if modifiers.command() => match c.to_ascii_lowercase() {
                'z' if modifiers.shift => outcome(self.redo(), KeyOutcome::Redone),
                'z' => outcome(self.undo(), KeyOutcome::Undone),
                'y' => outcome(self.redo(), KeyOutcome::Redone),
                _ => KeyOutcome::Ignored,
            },
            Key::Char(_) => KeyOutcome::Ignored,
        }
    }
}

fn outcome(changed: bool, on_change: KeyOutcome) -> KeyOutcome {
    if changed {
        on_change
    } else {
        KeyOutcome::Ignored
    }
}
