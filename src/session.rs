//! Editing session: one editor over a collection of layouts.
//!
//! The session owns the layout collection loaded from the library, the
//! [`Editor`] working on the active layout and the save indicator. Switching
//! layouts starts a new editing session on the target (fresh history).
//! Saves are two-phase: [`EditingSession::begin_save`] captures the present
//! document and returns a [`PendingSave`] that can run while editing goes on.

use gymfloor_core::{default_layout, EventDispatcher, Layout, SaveState};
use gymfloor_designer::Editor;
use gymfloor_settings::Config;
use gymfloor_storage::{LayoutLibrary, PendingLayoutDelete, SaveIndicator, SaveTicket};
use std::time::Duration;

/// Save of a captured document, detached from the session.
#[derive(Debug)]
#[must_use = "a pending save does nothing until run"]
pub struct PendingSave {
    layout: Layout,
    ticket: SaveTicket,
    library: LayoutLibrary,
    indicator: SaveIndicator,
}

impl PendingSave {
    /// The document as it was when the save was invoked.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Write the document and settle the indicator. Returns whether it was stored.
    pub async fn run(self) -> bool {
        let ok = self.library.save(&self.layout).await;
        self.indicator.finish(self.ticket, ok);
        ok
    }
}

#[derive(Debug)]
pub struct EditingSession {
    editor: Editor,
    /// Every known layout; the active entry is refreshed from the editor on
    /// switch and save
    layouts: Vec<Layout>,
    library: LayoutLibrary,
    indicator: SaveIndicator,
}

impl EditingSession {
    /// Load the collection and start editing its first layout.
    pub async fn open(library: LayoutLibrary, config: &Config) -> Self {
        let mut layouts = library.load_all().await;
        if layouts.is_empty() {
            layouts.push(default_layout());
        }
        let events = EventDispatcher::default();
        let editor = Editor::with_events(
            layouts[0].clone(),
            config.to_editor_config(),
            events.clone(),
        );
        let indicator = SaveIndicator::new(
            Duration::from_millis(config.storage.saved_indicator_ms),
            events,
        );
        tracing::info!(
            "Editing session opened on {} ({} layouts)",
            layouts[0].id,
            layouts.len()
        );
        Self {
            editor,
            layouts,
            library,
            indicator,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn events(&self) -> &EventDispatcher {
        self.editor.events()
    }

    pub fn active_id(&self) -> &str {
        &self.editor.layout().id
    }

    /// The collection, with the active layout as currently edited.
    pub fn layouts(&self) -> Vec<&Layout> {
        let active = self.editor.layout();
        self.layouts
            .iter()
            .map(|l| if l.id == active.id { active } else { l })
            .collect()
    }

    pub fn save_state(&self) -> SaveState {
        self.indicator.state()
    }

    pub fn can_save(&self) -> bool {
        self.indicator.can_save()
    }

    fn stash_active(&mut self) {
        let present = self.editor.layout();
        if let Some(slot) = self.layouts.iter_mut().find(|l| l.id == present.id) {
            *slot = present.clone();
        }
    }

    /// Start editing another layout of the collection.
    pub fn switch_to(&mut self, id: &str) -> bool {
        if id == self.active_id() {
            return false;
        }
        let Some(target) = self.layouts.iter().find(|l| l.id == id).cloned() else {
            tracing::debug!("Ignoring switch to unknown layout {}", id);
            return false;
        };
        self.stash_active();
        self.editor.load(target);
        true
    }

    /// Create a "New Location" layout, add it to the collection and edit it.
    pub async fn create_layout(&mut self) -> String {
        let layout = self.library.new_layout().await;
        let id = layout.id.clone();
        self.layouts.push(layout);
        self.switch_to(&id);
        id
    }

    /// Capture the present document for saving.
    ///
    /// Returns `None` while another save is in flight. Edits made after this
    /// call are not part of the save.
    pub fn begin_save(&mut self) -> Option<PendingSave> {
        let ticket = self.indicator.begin()?;
        self.stash_active();
        Some(PendingSave {
            layout: self.editor.layout().clone(),
            ticket,
            library: self.library.clone(),
            indicator: self.indicator.clone(),
        })
    }

    /// Convenience for `begin_save` followed by `run`.
    pub async fn save(&mut self) -> bool {
        match self.begin_save() {
            Some(pending) => pending.run().await,
            None => false,
        }
    }

    pub fn request_delete_layout(&self, id: &str) -> Option<PendingLayoutDelete> {
        let layout = self.layouts.iter().find(|l| l.id == id)?;
        Some(self.library.request_delete(layout))
    }

    /// Delete a layout from the collection and the store.
    ///
    /// Deleting the layout being edited ends its editing session: the editor
    /// moves to the first remaining layout, or to the default layout if none
    /// remain. Store failures are logged and do not undo the removal.
    pub async fn confirm_delete_layout(&mut self, pending: PendingLayoutDelete) -> bool {
        let id = pending.id().to_string();
        let Some(index) = self.layouts.iter().position(|l| l.id == id) else {
            return false;
        };
        self.layouts.remove(index);
        self.library.confirm_delete(pending).await;

        if self.active_id() == id {
            if self.layouts.is_empty() {
                self.layouts.push(default_layout());
            }
            let next = self.layouts[0].clone();
            tracing::info!("Layout {} deleted while editing, switching to {}", id, next.id);
            self.editor.load(next);
        }
        true
    }
}
