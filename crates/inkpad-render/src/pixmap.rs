//! Pixmap-backed persistent buffer and visible frame.

use crate::convert::{to_skia_paint, to_skia_path, to_skia_stroke};
use crate::{RenderError, RenderResult};
use inkpad_core::{Frame, InkCanvas, InkColor, PixelSize, RasterBuffer, StrokeStyle};
use kurbo::BezPath;
use tiny_skia::{Pixmap, PixmapPaint, Transform};

fn allocate(width: u32, height: u32) -> RenderResult<Pixmap> {
    Pixmap::new(width, height).ok_or(RenderError::Allocation { width, height })
}

fn stroke_onto(pixmap: &mut Pixmap, path: &BezPath, style: &StrokeStyle) {
    let Some(path) = to_skia_path(path) else {
        return;
    };
    pixmap.stroke_path(
        &path,
        &to_skia_paint(style),
        &to_skia_stroke(style),
        Transform::identity(),
        None,
    );
}

/// Persistent RGBA buffer holding committed ink.
#[derive(Debug, Clone)]
pub struct PixmapBuffer {
    pixmap: Pixmap,
}

impl PixmapBuffer {
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Premultiplied RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Alpha of the pixel at (x, y), or `None` outside the buffer.
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixmap.pixel(x, y).map(|p| p.alpha())
    }
}

impl InkCanvas for PixmapBuffer {
    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle) {
        stroke_onto(&mut self.pixmap, path, style);
    }
}

impl RasterBuffer for PixmapBuffer {
    type Error = RenderError;

    fn blank(size: PixelSize) -> RenderResult<Self> {
        let pixmap = allocate(size.width, size.height)?;
        log::debug!("Allocated {}x{} ink buffer", size.width, size.height);
        Ok(Self { pixmap })
    }

    fn size(&self) -> PixelSize {
        PixelSize {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
        }
    }

    fn is_blank(&self) -> bool {
        self.pixmap.data().iter().all(|&b| b == 0)
    }
}

/// Visible output for a render pass.
#[derive(Debug, Clone)]
pub struct PixmapFrame {
    pixmap: Pixmap,
    background: InkColor,
}

impl PixmapFrame {
    /// Create a frame filled with `background`.
    pub fn new(width: u32, height: u32, background: InkColor) -> RenderResult<Self> {
        let mut frame = Self {
            pixmap: allocate(width, height)?,
            background,
        };
        frame.clear();
        Ok(frame)
    }

    /// Fill the whole frame with the background color.
    pub fn clear(&mut self) {
        let InkColor { r, g, b, a } = self.background;
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixmap.pixel(x, y).map(|p| p.alpha())
    }
}

impl InkCanvas for PixmapFrame {
    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle) {
        stroke_onto(&mut self.pixmap, path, style);
    }
}

impl Frame for PixmapFrame {
    type Buffer = PixmapBuffer;

    fn draw_buffer(&mut self, buffer: &PixmapBuffer) {
        self.pixmap.draw_pixmap(
            0,
            0,
            buffer.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}
