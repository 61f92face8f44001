//! Application configuration.

use inkpad_core::{ConfigError, ConfigResult, InkColor, SurfaceConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Host window settings plus the surface configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Color behind the ink buffer in the visible frame.
    pub background: InkColor,
    pub surface: SurfaceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "InkPad".to_string(),
            width: 1080,
            height: 1920,
            background: InkColor::white(),
            surface: SurfaceConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.surface.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }
}
