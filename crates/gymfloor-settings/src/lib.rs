//! Gymfloor Settings Crate
//!
//! Editor configuration: snapping, viewport framing, size limits, history
//! depth and storage location, loaded from JSON or TOML.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, HistorySettings, StorageSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
