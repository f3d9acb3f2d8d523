//! Editor state for UI integration.
//!
//! `Editor` owns the history of layout documents, the selection, the edit
//! mode and the pointer interaction. Consumers read the present document and
//! dispatch operations; they never mutate the document directly.
//!
//! This module is split into submodules:
//! - `entities`: add/delete of zones, machines and annexes
//! - `drag`: pointer-driven move/resize
//! - `fields`: two-phase property edits
//! - `keyboard`: delete and undo/redo shortcuts

mod drag;
mod entities;
mod fields;
mod keyboard;

pub use entities::{DeleteTarget, PendingDelete};
pub use keyboard::{Key, KeyOutcome};

use crate::commands::{self, LayoutAction};
use crate::history::History;
use crate::interaction::{EditMode, Interaction};
use crate::limits::SizeLimits;
use crate::selection_manager::SelectionManager;
use crate::snapping::SnapConfig;
use crate::viewport::{self, ViewWindow, ViewportConfig};
use gymfloor_core::constants::DEFAULT_HISTORY_DEPTH;
use gymfloor_core::{EventDispatcher, Layout, LayoutEvent};

/// Engine parameters for an editing session.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub snap: SnapConfig,
    pub viewport: ViewportConfig,
    pub limits: SizeLimits,
    pub history_depth: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap: SnapConfig::default(),
            viewport: ViewportConfig::default(),
            limits: SizeLimits::default(),
            history_depth: DEFAULT_HISTORY_DEPTH,
        }
    }
}

/// Layout editor for one editing session.
#[derive(Debug)]
pub struct Editor {
    history: History<Layout>,
    selection: SelectionManager,
    mode: EditMode,
    interaction: Interaction,
    /// A property field has focus (between `begin_edit` and `end_edit`)
    editing_field: bool,
    config: EditorConfig,
    events: EventDispatcher,
}

impl Editor {
    pub fn new(layout: Layout, config: EditorConfig) -> Self {
        Self::with_events(layout, config, EventDispatcher::default())
    }

    /// Editor publishing to an existing dispatcher.
    pub fn with_events(layout: Layout, config: EditorConfig, events: EventDispatcher) -> Self {
        let layout = admit(layout, &config.limits);
        Self {
            history: History::with_max_depth(layout, config.history_depth),
            selection: SelectionManager::new(),
            mode: EditMode::default(),
            interaction: Interaction::Idle,
            editing_field: false,
            config,
            events,
        }
    }

    /// Start a new editing session on `layout`: empty history, no selection.
    ///
    /// Degenerate geometry (zero, negative or non-finite sizes) is grown to
    /// the configured minimums first.
    pub fn load(&mut self, layout: Layout) {
        tracing::debug!("Loading layout {} into editor", layout.id);
        let layout = admit(layout, &self.config.limits);
        self.interaction = Interaction::Idle;
        self.editing_field = false;
        self.selection.clear();
        self.history.reset(layout);
        self.publish_document();
        self.publish_selection();
    }

    /// The present document.
    pub fn layout(&self) -> &Layout {
        self.history.present()
    }

    pub fn history(&self) -> &History<Layout> {
        &self.history
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    pub fn is_editing_field(&self) -> bool {
        self.editing_field
    }

    // ---- mode & selection ----

    /// Switch edit mode. Ends any drag or field edit and clears the selection.
    pub fn set_mode(&mut self, mode: EditMode) {
        if mode == self.mode {
            return;
        }
        self.pointer_up();
        self.end_edit();
        self.mode = mode;
        self.selection.clear();
        tracing::debug!("Edit mode: {}", mode);
        self.events.publish(LayoutEvent::ModeChanged(mode.to_string()));
        self.publish_selection();
    }

    /// Select a zone if it exists. Returns whether the selection changed.
    pub fn select_zone(&mut self, zone_id: &str) -> bool {
        if !self.layout().has_zone(zone_id) || self.selection.zone_id() == Some(zone_id) {
            return false;
        }
        self.selection.select_zone(zone_id);
        self.publish_selection();
        true
    }

    /// Select a machine (and its zone) if it exists.
    pub fn select_machine(&mut self, zone_id: &str, machine_id: &str) -> bool {
        if self.layout().machine(zone_id, machine_id).is_none() {
            return false;
        }
        self.selection.select_machine(zone_id, machine_id);
        self.publish_selection();
        true
    }

    pub fn select_annex(&mut self, annex_id: &str) -> bool {
        if !self.layout().has_annex(annex_id) {
            return false;
        }
        self.selection.select_annex(annex_id);
        self.publish_selection();
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.publish_selection();
    }

    // ---- views ----

    /// Window the renderer should use right now.
    ///
    /// The locked window while dragging; the selected zone's focused view in
    /// machine mode; otherwise the full view.
    pub fn view_window(&self) -> ViewWindow {
        if let Some(session) = self.interaction.session() {
            return *session.locked_view().window();
        }
        self.computed_view()
    }

    fn computed_view(&self) -> ViewWindow {
        let focus = match self.mode {
            EditMode::Machine => self.selection.zone_id(),
            _ => None,
        };
        viewport::view_for(self.layout(), focus, &self.config.viewport)
    }

    // ---- history ----

    /// Undo one recorded step. Ignored while dragging.
    pub fn undo(&mut self) -> bool {
        if self.interaction.is_dragging() {
            return false;
        }
        self.end_edit();
        let changed = self.history.undo();
        if changed {
            tracing::debug!("Undo (remaining {})", self.history.undo_depth());
            self.after_document_change();
        }
        changed
    }

    /// Redo one undone step. Ignored while dragging.
    pub fn redo(&mut self) -> bool {
        if self.interaction.is_dragging() {
            return false;
        }
        self.end_edit();
        let changed = self.history.redo();
        if changed {
            tracing::debug!("Redo (remaining {})", self.history.redo_depth());
            self.after_document_change();
        }
        changed
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---- internals ----

    /// Run `action` through the reducer; replace `present` on change.
    pub(crate) fn dispatch(&mut self, action: LayoutAction, record: bool) -> bool {
        match commands::apply(self.layout(), &action, &self.config.limits) {
            Some(next) => {
                self.history.update(next, record);
                self.after_document_change();
                true
            }
            None => false,
        }
    }

    fn after_document_change(&mut self) {
        self.publish_document();
        if self.selection.prune(self.history.present()) {
            self.publish_selection();
        }
    }

    fn publish_document(&self) {
        self.events.publish(LayoutEvent::DocumentReplaced {
            layout_id: self.layout().id.clone(),
        });
    }

    fn publish_selection(&self) {
        self.events.publish(LayoutEvent::SelectionChanged {
            zone_id: self.selection.zone_id().map(str::to_string),
            machine_id: self.selection.machine_id().map(str::to_string),
            annex_id: self.selection.annex_id().map(str::to_string),
        });
    }
}

fn admit(layout: Layout, limits: &SizeLimits) -> Layout {
    match layout.validate() {
        Ok(()) => layout,
        Err(e) => {
            tracing::warn!("Repairing layout {}: {}", layout.id, e);
            limits.repair(&layout)
        }
    }
}
