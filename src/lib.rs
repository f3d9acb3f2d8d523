//! # Gymfloor
//!
//! Floor-plan editing engine for gym layouts: rectangular zones holding
//! machines, annexes extending the main room, an entrance marker, snapping,
//! drag interaction and snapshot undo/redo.
//!
//! ## Architecture
//!
//! Gymfloor is organized as a workspace with multiple crates:
//!
//! 1. **gymfloor-core** - Geometry model, coordinate spaces, layout document, events
//! 2. **gymfloor-designer** - Viewport, snapping, interaction, history, editor façade
//! 3. **gymfloor-settings** - Configuration (JSON / TOML)
//! 4. **gymfloor-storage** - Layout store trait, stores, library, save indicator
//! 5. **gymfloor** - Editing session wiring and the headless binary

pub mod session;

pub use gymfloor_designer as designer;

pub use gymfloor_core::{
    default_layout, Annex, Dimensions, Entrance, EntranceSide, EventDispatcher, FloorRect, Layout,
    LayoutError, LayoutEvent, Machine, SaveState, Zone, ZoneRect, ZoneType,
};

pub use gymfloor_designer::{
    full_view, DragHandle, EditMode, Editor, EditorConfig, FieldEdit, Key, KeyOutcome, Modifiers,
    ViewWindow, ViewerState,
};

pub use gymfloor_settings::{default_config_path, Config};

pub use gymfloor_storage::{
    InMemoryStore, JsonDirectoryStore, LayoutLibrary, LayoutStore, SaveIndicator,
};

pub use session::{EditingSession, PendingSave};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with target, level and line numbers
/// - RUST_LOG environment variable support, `info` by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
