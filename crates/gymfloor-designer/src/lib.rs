//! # Gymfloor Designer
//!
//! The layout editing engine: everything between a pointer event and a new
//! layout document.
//!
//! ## Core Components
//!
//! - **Viewport**: full-layout, focused-zone and locked view windows
//! - **Snapping**: grid snap, edge snap against room/annex edges, aspect lock
//! - **Interaction**: drag state machine turning pointer deltas into snapped updates
//! - **History**: snapshot undo/redo over whole documents
//! - **Commands**: layout actions and the reducer that applies them
//! - **Editor**: façade tying the above together for one editing session
//! - **Viewer**: read-only focus zoom with animated transitions
//!
//! ## Architecture
//!
//! ```text
//! Editor
//!   ├── History<Layout>      (past / present / future)
//!   ├── SelectionManager
//!   ├── Interaction          (Idle | Dragging(DragSession))
//!   │     └── LockedView + ReferenceLines, frozen at drag start
//!   └── commands::apply      (Layout, LayoutAction) -> Option<Layout>
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gymfloor_designer::{Editor, EditorConfig};
//! use gymfloor_core::Layout;
//!
//! let mut editor = Editor::new(Layout::new_location(), EditorConfig::default());
//! let zone_id = editor.add_zone();
//! assert_eq!(editor.layout().zones.len(), 1);
//! editor.undo();
//! assert!(editor.layout().zone(&zone_id).is_none());
//! ```

pub mod commands;
pub mod editor_state;
pub mod history;
pub mod interaction;
pub mod limits;
pub mod selection_manager;
pub mod snapping;
pub mod viewer;
pub mod viewport;

pub use commands::{
    apply, AnnexField, FieldEdit, LayoutAction, LayoutField, MachineField, ZoneField,
};
pub use editor_state::{DeleteTarget, Editor, EditorConfig, Key, KeyOutcome, PendingDelete};
pub use history::History;
pub use interaction::{
    DragHandle, DragKind, DragSession, EditMode, Interaction, Modifiers, RoomHandle,
};
pub use limits::SizeLimits;
pub use selection_manager::SelectionManager;
pub use snapping::{snap_to_grid, ReferenceLines, SnapConfig, SnapPolicy};
pub use viewer::{ViewerOverlay, ViewerState};
pub use viewport::{
    focused_view, full_view, view_for, LockedView, ViewWindow, ViewportConfig, ZoomTransition,
};
