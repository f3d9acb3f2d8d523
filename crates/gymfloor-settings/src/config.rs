//! Configuration for gymfloor
//!
//! Configuration is organized into logical sections:
//! - Snapping (grid size, edge threshold, tie-break policy)
//! - Viewport framing (paddings, minimum window sizes, zoom duration)
//! - Size limits for zones, annexes, machines and the room
//! - History depth
//! - Storage location and the saved-indicator timeout
//!
//! Files are JSON or TOML, chosen by extension. Every field has a default, so
//! a partial file only overrides what it names.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use gymfloor_core::constants::DEFAULT_HISTORY_DEPTH;
use gymfloor_designer::{EditorConfig, SizeLimits, SnapConfig, ViewportConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Undo history settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Oldest snapshots beyond this depth are dropped
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_HISTORY_DEPTH,
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding one JSON file per layout
    pub layouts_dir: PathBuf,
    /// How long the "saved" indicator stays up before returning to idle
    pub saved_indicator_ms: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            layouts_dir: base.join("gymfloor").join("layouts"),
            saved_indicator_ms: 2000,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub snapping: SnapConfig,
    pub viewport: ViewportConfig,
    pub limits: SizeLimits,
    pub history: HistorySettings,
    pub storage: StorageSettings,
}

/// `<config dir>/gymfloor/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::UnsupportedPlatform("no configuration directory".to_string())
    })?;
    Ok(dir.join("gymfloor").join("config.toml"))
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating the parent directory.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path`, or fall back to defaults with a warning.
    ///
    /// A missing file is not an error and falls back silently.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !is_positive(self.snapping.grid_size) {
            return Err(SettingsError::invalid("snapping.grid_size", "must be > 0"));
        }
        if !is_non_negative(self.snapping.edge_threshold) {
            return Err(SettingsError::invalid(
                "snapping.edge_threshold",
                "must be >= 0",
            ));
        }

        let viewport = &self.viewport;
        for (key, value) in [
            ("viewport.min_width", viewport.min_width),
            ("viewport.min_height", viewport.min_height),
            ("viewport.focus_min_size", viewport.focus_min_size),
        ] {
            if !is_positive(value) {
                return Err(SettingsError::invalid(key, "must be > 0"));
            }
        }
        if !is_non_negative(viewport.full_padding) || !is_non_negative(viewport.focus_padding)
        {
            return Err(SettingsError::invalid("viewport", "paddings must be >= 0"));
        }

        let limits = &self.limits;
        for (key, value) in [
            ("limits.zone_min", limits.zone_min),
            ("limits.annex_min", limits.annex_min),
            ("limits.machine_min", limits.machine_min),
            ("limits.room_min", limits.room_min),
            ("limits.room_max", limits.room_max),
            ("limits.field_min", limits.field_min),
            ("limits.entrance_min_width", limits.entrance_min_width),
        ] {
            if !is_positive(value) {
                return Err(SettingsError::invalid(key, "must be > 0"));
            }
        }
        if limits.room_min > limits.room_max {
            return Err(SettingsError::invalid(
                "limits.room_min",
                format!("{} exceeds room_max {}", limits.room_min, limits.room_max),
            ));
        }

        if self.history.max_depth == 0 {
            return Err(SettingsError::invalid("history.max_depth", "must be > 0"));
        }
        Ok(())
    }

    /// Engine parameters for an editing session.
    pub fn to_editor_config(&self) -> EditorConfig {
        EditorConfig {
            snap: self.snapping,
            viewport: self.viewport,
            limits: self.limits,
            history_depth: self.history.max_depth,
        }
    }
}
