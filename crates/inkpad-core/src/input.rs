//! Pointer input events delivered by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Kind of pointer-contact action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerAction {
    /// Contact started (finger or pen down).
    Begin,
    /// Contact moved while down.
    Move,
    /// Contact lifted.
    End,
    /// Any other host action (hover, cancel, secondary pointers...), carried as the raw host code.
    Other(i32),
}

/// A single raw pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// Position in surface pixel coordinates.
    pub position: Point,
    /// Host event time in milliseconds.
    #[serde(default)]
    pub timestamp_ms: u64,
}

impl PointerEvent {
    /// Create an event at the given coordinates with a zero timestamp.
    pub fn new(action: PointerAction, x: f64, y: f64) -> Self {
        Self {
            action,
            position: Point::new(x, y),
            timestamp_ms: 0,
        }
    }

    pub fn begin(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Begin, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    pub fn end(x: f64, y: f64) -> Self {
        Self::new(PointerAction::End, x, y)
    }

    /// Set the event timestamp.
    pub fn with_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }
}
