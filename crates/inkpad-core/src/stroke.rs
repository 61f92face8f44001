//! The stroke currently being drawn.

use kurbo::{BezPath, PathEl, Point, Rect};

/// Vector path of the gesture in progress.
///
/// Created once per surface and reused: [`InProgressStroke::reset`] empties it
/// without giving back its allocation.
#[derive(Debug, Clone, Default)]
pub struct InProgressStroke {
    path: BezPath,
    /// Every sampled point in order, across sub-paths.
    points: Vec<Point>,
}

impl InProgressStroke {
    /// Create a new empty stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sub-path at `point`.
    pub fn begin(&mut self, point: Point) {
        self.path.move_to(point);
        self.points.push(point);
    }

    /// Append a straight segment from the current end to `point`.
    ///
    /// On an empty stroke this starts the path at `point` instead. A plain
    /// path line-to would implicitly begin that segment at (0, 0); here a move
    /// or end without a preceding begin never draws from the origin, and an
    /// end on its own commits nothing visible.
    pub fn line_to(&mut self, point: Point) {
        if self.is_empty() {
            self.begin(point);
            return;
        }
        self.path.line_to(point);
        self.points.push(point);
    }

    /// Empty the stroke, keeping its buffers.
    pub fn reset(&mut self) {
        self.path.truncate(0);
        self.points.clear();
    }

    /// Check if the stroke is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The vector path built so far.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Sampled points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of straight segments in the path.
    pub fn segment_count(&self) -> usize {
        self.path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::LineTo(_)))
            .count()
    }

    /// Bounding box of the sampled points, or `None` while empty.
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.points.first()?;
        let rect = self
            .points
            .iter()
            .fold(Rect::from_points(first, first), |rect, p| rect.union_pt(*p));
        Some(rect)
    }
}
