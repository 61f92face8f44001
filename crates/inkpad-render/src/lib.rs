//! InkPad Render Library
//!
//! Software raster backend for the InkPad drawing surface.
//! Buffers and frames are `tiny-skia` pixmaps; kurbo paths and InkPad stroke
//! styles are converted on the way in.

mod convert;
mod pixmap;

pub use convert::{to_skia_color, to_skia_paint, to_skia_path, to_skia_stroke};
pub use pixmap::{PixmapBuffer, PixmapFrame};

use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot allocate a {width}x{height} pixmap")]
    Allocation { width: u32, height: u32 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
