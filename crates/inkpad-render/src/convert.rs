//! Conversions from kurbo/peniko/InkPad types to tiny-skia.

use inkpad_core::{LineCap, LineJoin, StrokeStyle};
use kurbo::{BezPath, PathEl};
use peniko::Color;
use tiny_skia::{Paint, Path, PathBuilder, Stroke};

/// Convert a kurbo path. Returns `None` for paths tiny-skia cannot draw,
/// such as a lone move-to.
pub fn to_skia_path(path: &BezPath) -> Option<Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

pub fn to_skia_color(color: Color) -> tiny_skia::Color {
    let rgba = color.to_rgba8();
    tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Solid paint in the style's color, honoring its anti-alias flag.
pub fn to_skia_paint(style: &StrokeStyle) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_skia_color(style.color()));
    paint.anti_alias = style.anti_alias();
    paint
}

pub fn to_skia_stroke(style: &StrokeStyle) -> Stroke {
    Stroke {
        width: style.width() as f32,
        line_join: match style.join() {
            LineJoin::Miter => tiny_skia::LineJoin::Miter,
            LineJoin::Round => tiny_skia::LineJoin::Round,
            LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
        },
        line_cap: match style.cap() {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        },
        ..Stroke::default()
    }
}
