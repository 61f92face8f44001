//! Stroke sink: where raw pointer samples go after the surface has used them.
//!
//! The surface calls its sink synchronously once per pointer event and never
//! looks at a result. Recognition, classification and anything else done with
//! the samples lives behind this trait.

use crate::input::{PointerAction, PointerEvent};
use serde::{Deserialize, Serialize};

/// Consumer of raw pointer samples.
pub trait StrokeSink {
    /// Receive one pointer event, unchanged.
    fn add_touch_event(&mut self, event: &PointerEvent);
}

impl<S: StrokeSink + ?Sized> StrokeSink for &mut S {
    fn add_touch_event(&mut self, event: &PointerEvent) {
        (**self).add_touch_event(event);
    }
}

impl<S: StrokeSink + ?Sized> StrokeSink for Box<S> {
    fn add_touch_event(&mut self, event: &PointerEvent) {
        (**self).add_touch_event(event);
    }
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StrokeSink for NullSink {
    fn add_touch_event(&mut self, _event: &PointerEvent) {}
}

/// A timestamped ink sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InkPoint {
    pub x: f64,
    pub y: f64,
    /// Milliseconds, as reported by the host.
    pub t: u64,
}

impl From<&PointerEvent> for InkPoint {
    fn from(event: &PointerEvent) -> Self {
        Self {
            x: event.position.x,
            y: event.position.y,
            t: event.timestamp_ms,
        }
    }
}

/// One recorded stroke.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InkStroke {
    pub points: Vec<InkPoint>,
}

/// Strokes in the order they were drawn, ready to hand to a recognizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ink {
    pub strokes: Vec<InkStroke>,
}

impl Ink {
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Sink that groups samples into strokes.
///
/// Begin opens a stroke, Move and End append to it and End closes it. A Begin
/// while a stroke is open closes the open one first; a Move with no open
/// stroke opens one. Other actions are counted and otherwise ignored.
#[derive(Debug, Clone, Default)]
pub struct InkRecorder {
    ink: Ink,
    current: Option<InkStroke>,
    events_seen: usize,
    ignored: usize,
}

impl InkRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed strokes.
    pub fn ink(&self) -> &Ink {
        &self.ink
    }

    /// The stroke still being drawn, if any.
    pub fn current_stroke(&self) -> Option<&InkStroke> {
        self.current.as_ref()
    }

    /// Take completed strokes, leaving the recorder empty of them.
    pub fn take_ink(&mut self) -> Ink {
        std::mem::take(&mut self.ink)
    }

    /// Total events received.
    pub fn events_seen(&self) -> usize {
        self.events_seen
    }

    /// Events with an action that carries no ink.
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Drop all recorded ink, including a stroke in progress.
    pub fn reset(&mut self) {
        self.ink.strokes.clear();
        self.current = None;
    }

    fn finish_current(&mut self) {
        if let Some(stroke) = self.current.take() {
            self.ink.strokes.push(stroke);
        }
    }
}

impl StrokeSink for InkRecorder {
    fn add_touch_event(&mut self, event: &PointerEvent) {
        self.events_seen += 1;
        let point = InkPoint::from(event);
        match event.action {
            PointerAction::Begin => {
                self.finish_current();
                self.current = Some(InkStroke {
                    points: vec![point],
                });
            }
            PointerAction::Move => {
                self.current.get_or_insert_with(InkStroke::default).points.push(point);
            }
            PointerAction::End => {
                self.current.get_or_insert_with(InkStroke::default).points.push(point);
                self.finish_current();
            }
            PointerAction::Other(code) => {
                log::trace!("Ink recorder ignoring action {}", code);
                self.ignored += 1;
            }
        }
    }
}
