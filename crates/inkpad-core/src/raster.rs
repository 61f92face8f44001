//! Raster abstraction between the surface and a concrete pixel backend.
//!
//! The surface only needs to stroke a path into something and to copy its
//! persistent buffer onto the visible output. Backends live in other crates.

use crate::style::StrokeStyle;
use kurbo::BezPath;
use serde::{Deserialize, Serialize};

/// Dimensions of a raster in physical pixels. Both sides are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    /// Validate host dimensions, rejecting non-positive sides.
    pub fn from_host(width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Self {
            width: width as u32,
            height: height as u32,
        })
    }
}

/// Anything ink can be stroked onto.
pub trait InkCanvas {
    /// Stroke `path` with `style`. Paths with no segments draw nothing.
    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle);
}

/// The persistent buffer that accumulates completed strokes.
pub trait RasterBuffer: InkCanvas + Sized {
    type Error: std::error::Error;

    /// Allocate a fully transparent buffer.
    fn blank(size: PixelSize) -> Result<Self, Self::Error>;

    fn size(&self) -> PixelSize;

    /// Whether every pixel is fully transparent.
    fn is_blank(&self) -> bool;
}

/// The visible output a render pass draws into.
pub trait Frame: InkCanvas {
    type Buffer: RasterBuffer;

    /// Copy the persistent buffer onto the frame at the origin.
    fn draw_buffer(&mut self, buffer: &Self::Buffer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_host() {
        assert_eq!(
            PixelSize::from_host(640, 480),
            Some(PixelSize {
                width: 640,
                height: 480
            })
        );
        assert_eq!(PixelSize::from_host(0, 480), None);
        assert_eq!(PixelSize::from_host(640, -1), None);
    }
}
