//! Config Module
//!
//! Centralized, serde-backed configuration for the demo. Every section has a
//! `Default` matching the shipped tuning, and every field may be omitted from
//! a JSON file.
//!
//! ```rust,ignore
//! let config = DemoConfig::load(Path::new("tuning.json"))?;
//! let terrain = TerrainSurface::generate(&config.terrain);
//! ```

pub mod display_config;
pub mod movement_config;
pub mod terrain_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use display_config::{CameraConfig, FrameConfig, WindowConfig};
pub use movement_config::MovementConfig;
pub use terrain_config::{MAX_GRID_CELLS, TerrainConfig};

/// Full demo configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub terrain: TerrainConfig,
    pub movement: MovementConfig,
    pub camera: CameraConfig,
    pub frame: FrameConfig,
}

impl DemoConfig {
    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.terrain.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty-printed JSON (handy for dumping a starting file).
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON deserialization error.
    Json(serde_json::Error),
    /// Parsed, but a value is out of range.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = DemoConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_nested_override() {
        let config = DemoConfig::from_json_str(
            r#"{ "terrain": { "grid_cells": 8 }, "frame": { "max_dt": 0.05 } }"#,
        )
        .unwrap();
        assert_eq!(config.terrain.grid_cells, 8);
        assert_eq!(config.terrain.cell_spacing, 2.5);
        assert_eq!(config.frame.max_dt, 0.05);
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = DemoConfig::default();
        config.movement.gravity = 15.0;
        let json = config.to_json_pretty().unwrap();
        assert_eq!(DemoConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = DemoConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let err = DemoConfig::from_json_str(r#"{ "terrain": { "grid_cells": 4000000000 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("grid_cells"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DemoConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
