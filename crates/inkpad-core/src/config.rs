//! Surface configuration.

use crate::style::{InkColor, LineCap, LineJoin, STROKE_WIDTH_DP, StrokeStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings the stroke style is built from.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Stroke width in density-independent pixels.
    pub stroke_width_dp: f64,
    /// Physical pixels per density-independent pixel, as resolved by the host.
    pub density: f64,
    pub color: InkColor,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
    pub anti_alias: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            stroke_width_dp: STROKE_WIDTH_DP,
            density: 1.0,
            color: InkColor::black(),
            line_join: LineJoin::Round,
            line_cap: LineCap::Round,
            anti_alias: true,
        }
    }
}

impl SurfaceConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded surface config from {:?}", path);
        Ok(config)
    }

    /// Check that width and density are finite and positive.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.stroke_width_dp.is_finite() || self.stroke_width_dp <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "stroke_width_dp must be positive, got {}",
                self.stroke_width_dp
            )));
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        Ok(())
    }

    /// Build the stroke style, with the width converted to physical pixels.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(
            self.color,
            self.stroke_width_dp * self.density,
            self.line_join,
            self.line_cap,
            self.anti_alias,
        )
    }
}
