//! Batch configuration.
//!
//! Loaded from an optional `config.toml` in the working directory (the
//! directory holding the artwork). User values are merged over stock
//! defaults, so a file only needs the keys it changes:
//!
//! ```toml
//! [canvas]
//! width = 8000              # Preview width in pixels
//! height = 8000             # Preview height in pixels
//! background = [0, 0, 0]    # RGB fill behind the artwork
//!
//! [paths]
//! frames_dir = "../frames"  # Frame mockups, relative to the working directory
//! output_dir = "output"     # Previews, relative to the working directory
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::Canvas;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Batch configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Output canvas settings.
    pub canvas: CanvasConfig,
    /// Where frames are read from and previews are written to.
    pub paths: PathsConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl PreviewConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Validation(
                "canvas.width and canvas.height must be non-zero".into(),
            ));
        }
        if self.paths.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "paths.output_dir must not be empty".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Frames directory resolved against the working directory.
    pub fn frames_dir(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.paths.frames_dir)
    }

    /// Output directory resolved against the working directory.
    pub fn output_dir(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.paths.output_dir)
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.canvas.width,
            height: self.canvas.height,
            background: self.canvas.background,
        }
    }
}

/// Preview canvas. Frame mockups are expected to be drawn at this size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// RGB fill visible wherever neither artwork nor frame covers the canvas.
    pub background: [u8; 3],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 8000,
            height: 8000,
            background: [0, 0, 0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub frames_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            frames_dir: PathBuf::from("../frames"),
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel compositing workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Stock defaults as a TOML table, the base layer for user overrides.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(PreviewConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `config.toml` from a directory, `Ok(None)` if there is none.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<PreviewConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PreviewConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config for a working directory.
pub fn load_config(working_dir: &Path) -> Result<PreviewConfig, ConfigError> {
    resolve_config(load_raw_config(working_dir)?)
}

/// Fully commented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Art Preview Configuration
# =========================
#
# Place this file as config.toml next to your artwork. Every key is optional;
# omitted keys keep the values shown here.

[canvas]
# Size of every generated preview, in pixels. Frame mockups are drawn at
# (0, 0) over the artwork and should be exactly this size.
width = 8000
height = 8000
# RGB color behind the artwork, visible through transparent frame areas
# the artwork does not cover.
background = [0, 0, 0]

[paths]
# Directory searched recursively for frame mockups (*.png), relative to the
# directory holding the artwork.
frames_dir = "../frames"
# Directory previews are written to, created on demand.
output_dir = "output"

[processing]
# Maximum parallel workers. Omit to use all CPU cores; larger values are
# clamped to the core count.
# max_processes = 4
"##
}
