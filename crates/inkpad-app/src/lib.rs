//! InkPad Application
//!
//! Headless host shell: owns a drawing surface and its visible frame, feeds
//! them host callbacks and repaints whenever the surface asks for it.

mod config;
mod host;
mod session;

pub use config::AppConfig;
pub use host::{HeadlessHost, HostEvent};
pub use session::Session;

use inkpad_core::{ConfigError, SurfaceError};
use inkpad_render::RenderError;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Session error: {0}")]
    Session(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
