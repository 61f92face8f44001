//! Stroke styling applied to every ink stroke.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Default stroke width in density-independent pixels.
pub const STROKE_WIDTH_DP: f64 = 5.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InkColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl InkColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl Default for InkColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for InkColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<InkColor> for Color {
    fn from(color: InkColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How consecutive segments are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// How open path ends are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Visual parameters for ink strokes.
///
/// Built once when the surface is created and never mutated afterwards, so
/// fields are only reachable through getters.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    color: InkColor,
    width: f64,
    join: LineJoin,
    cap: LineCap,
    anti_alias: bool,
}

impl StrokeStyle {
    /// Create a style with explicit parameters. `width` is in physical pixels.
    pub fn new(color: InkColor, width: f64, join: LineJoin, cap: LineCap, anti_alias: bool) -> Self {
        Self {
            color,
            width,
            join,
            cap,
            anti_alias,
        }
    }

    /// Default ink (opaque black, round joins and caps, anti-aliased) with the
    /// width scaled from [`STROKE_WIDTH_DP`] by the display density.
    pub fn for_density(density: f64) -> Self {
        Self {
            width: STROKE_WIDTH_DP * density,
            ..Self::default()
        }
    }

    pub fn color(&self) -> Color {
        self.color.into()
    }

    pub fn ink_color(&self) -> InkColor {
        self.color
    }

    /// Stroke width in physical pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn join(&self) -> LineJoin {
        self.join
    }

    pub fn cap(&self) -> LineCap {
        self.cap
    }

    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: InkColor::black(),
            width: STROKE_WIDTH_DP,
            join: LineJoin::Round,
            cap: LineCap::Round,
            anti_alias: true,
        }
    }
}
