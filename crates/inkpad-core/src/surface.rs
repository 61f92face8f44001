//! The drawing surface: turns pointer gestures into ink on a persistent buffer.

use crate::config::SurfaceConfig;
use crate::input::{PointerAction, PointerEvent};
use crate::raster::{Frame, PixelSize, RasterBuffer};
use crate::sink::StrokeSink;
use crate::stroke::InProgressStroke;
use crate::style::StrokeStyle;
use thiserror::Error;

/// Surface errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[error("Buffer allocation failed: {0}")]
    Allocation(String),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Whether a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceState {
    #[default]
    Idle,
    Drawing,
}

/// Callbacks a host view system delivers to a drawing surface.
///
/// The host guarantees a size change arrives before any draw or pointer
/// callback, and calls everything from one thread.
pub trait SurfaceCallbacks {
    type Buffer: RasterBuffer;

    /// The surface was laid out at a new size.
    fn on_size_changed(
        &mut self,
        width: i32,
        height: i32,
        old_width: i32,
        old_height: i32,
    ) -> SurfaceResult<()>;

    /// Paint the current state into `frame`.
    fn on_draw<F: Frame<Buffer = Self::Buffer>>(&self, frame: &mut F);

    /// Handle one pointer sample. Returns whether the event was consumed.
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool;
}

/// A single freehand drawing surface.
///
/// Completed strokes live in the persistent buffer `B`; the stroke being drawn
/// is kept as a vector path and painted over the buffer on each render until
/// the contact ends. Every pointer sample is passed on to the sink `S`.
pub struct DrawingSurface<B, S> {
    style: StrokeStyle,
    stroke: InProgressStroke,
    buffer: Option<B>,
    sink: S,
    redraw_pending: bool,
    redraw_requests: u64,
}

impl<B: RasterBuffer, S: StrokeSink> DrawingSurface<B, S> {
    /// Create a surface with no buffer yet. The host sizes it before use.
    pub fn new(style: StrokeStyle, sink: S) -> Self {
        Self {
            style,
            stroke: InProgressStroke::new(),
            buffer: None,
            sink,
            redraw_pending: false,
            redraw_requests: 0,
        }
    }

    /// Create a surface with the style described by `config`.
    pub fn from_config(config: &SurfaceConfig, sink: S) -> Self {
        Self::new(config.stroke_style(), sink)
    }

    /// Reset to a blank canvas at the current size and drop any stroke in progress.
    pub fn clear(&mut self) -> SurfaceResult<()> {
        self.stroke.reset();
        match self.size() {
            Some(size) => {
                let (width, height) = (size.width as i32, size.height as i32);
                self.on_size_changed(width, height, width, height)
            }
            None => {
                self.request_redraw();
                Ok(())
            }
        }
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn stroke(&self) -> &InProgressStroke {
        &self.stroke
    }

    /// The persistent buffer, once the host has sized the surface.
    pub fn buffer(&self) -> Option<&B> {
        self.buffer.as_ref()
    }

    pub fn size(&self) -> Option<PixelSize> {
        self.buffer.as_ref().map(RasterBuffer::size)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn state(&self) -> SurfaceState {
        if self.stroke.is_empty() {
            SurfaceState::Idle
        } else {
            SurfaceState::Drawing
        }
    }

    /// Drain the pending redraw flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    /// Redraws requested over the surface's lifetime.
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }

    fn request_redraw(&mut self) {
        self.redraw_pending = true;
        self.redraw_requests += 1;
    }

    /// Rasterize the in-progress path onto the buffer and empty it.
    fn commit_stroke(&mut self) {
        match self.buffer.as_mut() {
            Some(buffer) => {
                buffer.stroke_path(self.stroke.path(), &self.style);
                log::debug!(
                    "Committed stroke with {} segments",
                    self.stroke.segment_count()
                );
            }
            None => log::warn!("Stroke ended before the surface was sized; dropping it"),
        }
        self.stroke.reset();
    }
}

impl<B: RasterBuffer, S: StrokeSink> SurfaceCallbacks for DrawingSurface<B, S> {
    type Buffer = B;

    fn on_size_changed(
        &mut self,
        width: i32,
        height: i32,
        old_width: i32,
        old_height: i32,
    ) -> SurfaceResult<()> {
        let size =
            PixelSize::from_host(width, height).ok_or(SurfaceError::InvalidSize { width, height })?;
        let buffer = B::blank(size).map_err(|e| SurfaceError::Allocation(e.to_string()))?;
        self.buffer = Some(buffer);
        log::debug!(
            "Surface resized {}x{} -> {}x{}",
            old_width,
            old_height,
            width,
            height
        );
        self.request_redraw();
        Ok(())
    }

    fn on_draw<F: Frame<Buffer = Self::Buffer>>(&self, frame: &mut F) {
        if let Some(buffer) = &self.buffer {
            frame.draw_buffer(buffer);
        }
        if !self.stroke.is_empty() {
            frame.stroke_path(self.stroke.path(), &self.style);
        }
    }

    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        log::trace!(
            "Pointer {:?} at ({}, {})",
            event.action,
            event.position.x,
            event.position.y
        );
        match event.action {
            PointerAction::Begin => self.stroke.begin(event.position),
            PointerAction::Move => self.stroke.line_to(event.position),
            PointerAction::End => {
                self.stroke.line_to(event.position);
                self.commit_stroke();
            }
            PointerAction::Other(_) => {}
        }
        self.sink.add_touch_event(event);
        self.request_redraw();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::InkCanvas;
    use crate::sink::{InkRecorder, NullSink};
    use kurbo::{BezPath, PathEl, Point};
    use std::convert::Infallible;

    /// Buffer that remembers what was stroked onto it.
    #[derive(Debug, Clone, PartialEq)]
    struct RecordingBuffer {
        size: PixelSize,
        strokes: Vec<BezPath>,
    }

    impl InkCanvas for RecordingBuffer {
        fn stroke_path(&mut self, path: &BezPath, _style: &StrokeStyle) {
            self.strokes.push(path.clone());
        }
    }

    impl RasterBuffer for RecordingBuffer {
        type Error = Infallible;

        fn blank(size: PixelSize) -> Result<Self, Infallible> {
            Ok(Self {
                size,
                strokes: Vec::new(),
            })
        }

        fn size(&self) -> PixelSize {
            self.size
        }

        fn is_blank(&self) -> bool {
            self.strokes.is_empty()
        }
    }

    #[derive(Debug, PartialEq)]
    enum DrawOp {
        Buffer(usize),
        Overlay(BezPath),
    }

    #[derive(Default)]
    struct RecordingFrame {
        ops: Vec<DrawOp>,
    }

    impl InkCanvas for RecordingFrame {
        fn stroke_path(&mut self, path: &BezPath, _style: &StrokeStyle) {
            self.ops.push(DrawOp::Overlay(path.clone()));
        }
    }

    impl Frame for RecordingFrame {
        type Buffer = RecordingBuffer;

        fn draw_buffer(&mut self, buffer: &RecordingBuffer) {
            self.ops.push(DrawOp::Buffer(buffer.strokes.len()));
        }
    }

    fn sized_surface<S: StrokeSink>(sink: S) -> DrawingSurface<RecordingBuffer, S> {
        let mut surface = DrawingSurface::new(StrokeStyle::default(), sink);
        surface.on_size_changed(100, 50, 0, 0).unwrap();
        surface
    }

    fn polyline(points: &[(f64, f64)]) -> BezPath {
        let mut path = BezPath::new();
        for (i, &(x, y)) in points.iter().enumerate() {
            if i == 0 {
                path.move_to((x, y));
            } else {
                path.line_to((x, y));
            }
        }
        path
    }

    #[test]
    fn test_size_change_allocates_blank_buffer() {
        let surface = sized_surface(NullSink);
        let buffer = surface.buffer().unwrap();
        assert_eq!(
            buffer.size(),
            PixelSize {
                width: 100,
                height: 50
            }
        );
        assert!(buffer.is_blank());
    }

    #[test]
    fn test_size_change_discards_content() {
        let mut surface = sized_surface(NullSink);
        surface.on_pointer_event(&PointerEvent::begin(1.0, 1.0));
        surface.on_pointer_event(&PointerEvent::end(5.0, 5.0));
        assert!(!surface.buffer().unwrap().is_blank());

        surface.on_size_changed(200, 80, 100, 50).unwrap();
        assert!(surface.buffer().unwrap().is_blank());
        assert_eq!(surface.size().map(|s| s.width), Some(200));
    }

    #[test]
    fn test_invalid_size_rejected() {
        let mut surface: DrawingSurface<RecordingBuffer, _> =
            DrawingSurface::new(StrokeStyle::default(), NullSink);
        let result = surface.on_size_changed(0, 10, 0, 0);
        assert!(matches!(
            result,
            Err(SurfaceError::InvalidSize {
                width: 0,
                height: 10
            })
        ));
        assert!(surface.buffer().is_none());
    }

    #[test]
    fn test_example_gesture() {
        let mut surface = sized_surface(InkRecorder::new());
        assert_eq!(surface.state(), SurfaceState::Idle);

        assert!(surface.on_pointer_event(&PointerEvent::begin(10.0, 10.0)));
        assert_eq!(surface.state(), SurfaceState::Drawing);
        surface.on_pointer_event(&PointerEvent::moved(20.0, 10.0));
        surface.on_pointer_event(&PointerEvent::end(20.0, 20.0));

        assert_eq!(surface.state(), SurfaceState::Idle);
        assert!(surface.stroke().is_empty());
        assert_eq!(
            surface.buffer().unwrap().strokes,
            vec![polyline(&[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)])]
        );
        assert_eq!(surface.sink().events_seen(), 3);
    }

    #[test]
    fn test_every_event_forwarded_verbatim() {
        let events = [
            PointerEvent::begin(1.5, 2.5).with_timestamp(10),
            PointerEvent::new(PointerAction::Other(2), 3.0, 4.0).with_timestamp(11),
            PointerEvent::moved(5.0, 6.0).with_timestamp(12),
            PointerEvent::end(7.0, 8.0).with_timestamp(13),
        ];

        struct Collect(Vec<PointerEvent>);
        impl StrokeSink for Collect {
            fn add_touch_event(&mut self, event: &PointerEvent) {
                self.0.push(*event);
            }
        }

        let mut surface = sized_surface(Collect(Vec::new()));
        for event in &events {
            surface.on_pointer_event(event);
        }
        assert_eq!(surface.sink().0, events.to_vec());
    }

    #[test]
    fn test_redraw_requested_after_every_event() {
        let mut surface = sized_surface(NullSink);
        assert!(surface.take_redraw_request());
        assert!(!surface.take_redraw_request());

        let before = surface.redraw_requests();
        surface.on_pointer_event(&PointerEvent::new(PointerAction::Other(9), 0.0, 0.0));
        assert!(surface.take_redraw_request());
        surface.on_pointer_event(&PointerEvent::begin(0.0, 0.0));
        surface.on_pointer_event(&PointerEvent::moved(1.0, 0.0));
        assert_eq!(surface.redraw_requests(), before + 3);
    }

    #[test]
    fn test_other_action_leaves_path() {
        let mut surface = sized_surface(NullSink);
        surface.on_pointer_event(&PointerEvent::begin(0.0, 0.0));
        surface.on_pointer_event(&PointerEvent::new(PointerAction::Other(5), 50.0, 50.0));
        assert_eq!(surface.stroke().points(), &[Point::new(0.0, 0.0)]);
    }

    #[test]
    fn test_draw_before_contact_shows_only_buffer() {
        let surface = sized_surface(NullSink);
        let mut frame = RecordingFrame::default();
        surface.on_draw(&mut frame);
        assert_eq!(frame.ops, vec![DrawOp::Buffer(0)]);
    }

    #[test]
    fn test_draw_overlays_in_progress_path() {
        let mut surface = sized_surface(NullSink);
        surface.on_pointer_event(&PointerEvent::begin(1.0, 1.0));
        surface.on_pointer_event(&PointerEvent::end(2.0, 2.0));
        surface.on_pointer_event(&PointerEvent::begin(3.0, 3.0));
        surface.on_pointer_event(&PointerEvent::moved(4.0, 3.0));

        let mut frame = RecordingFrame::default();
        surface.on_draw(&mut frame);
        surface.on_draw(&mut frame);
        let overlay = polyline(&[(3.0, 3.0), (4.0, 3.0)]);
        assert_eq!(
            frame.ops,
            vec![
                DrawOp::Buffer(1),
                DrawOp::Overlay(overlay.clone()),
                DrawOp::Buffer(1),
                DrawOp::Overlay(overlay),
            ]
        );
        assert_eq!(surface.buffer().unwrap().strokes.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut surface = sized_surface(NullSink);
        surface.on_pointer_event(&PointerEvent::begin(1.0, 1.0));
        surface.on_pointer_event(&PointerEvent::end(9.0, 9.0));
        surface.on_pointer_event(&PointerEvent::begin(3.0, 3.0));

        surface.clear().unwrap();

        assert!(surface.stroke().is_empty());
        assert_eq!(
            surface.buffer().unwrap(),
            &RecordingBuffer::blank(PixelSize {
                width: 100,
                height: 50
            })
            .unwrap()
        );
        assert!(surface.take_redraw_request());
    }

    #[test]
    fn test_clear_before_sizing() {
        let mut surface: DrawingSurface<RecordingBuffer, _> =
            DrawingSurface::new(StrokeStyle::default(), NullSink);
        surface.on_pointer_event(&PointerEvent::begin(1.0, 1.0));
        surface.clear().unwrap();
        assert!(surface.stroke().is_empty());
        assert!(surface.buffer().is_none());
    }

    #[test]
    fn test_end_before_sizing_drops_stroke() {
        let mut surface: DrawingSurface<RecordingBuffer, _> =
            DrawingSurface::new(StrokeStyle::default(), InkRecorder::new());
        surface.on_pointer_event(&PointerEvent::begin(1.0, 1.0));
        surface.on_pointer_event(&PointerEvent::end(2.0, 2.0));
        assert!(surface.stroke().is_empty());
        assert_eq!(surface.sink().ink().strokes.len(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = SurfaceConfig {
            density: 2.0,
            ..SurfaceConfig::default()
        };
        let surface: DrawingSurface<RecordingBuffer, _> =
            DrawingSurface::from_config(&config, NullSink);
        assert!((surface.style().width() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_without_begin_starts_at_sample() {
        let mut surface = sized_surface(NullSink);
        surface.on_pointer_event(&PointerEvent::moved(4.0, 4.0));
        assert_eq!(
            surface.stroke().path().elements(),
            &[PathEl::MoveTo(Point::new(4.0, 4.0))]
        );
    }
}
