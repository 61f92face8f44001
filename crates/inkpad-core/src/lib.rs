//! InkPad Core Library
//!
//! Platform-agnostic core data structures and logic for the InkPad drawing surface:
//! pointer input, stroke styling, the in-progress path, the stroke sink seam and
//! the surface state machine that ties them to a persistent raster buffer.

pub mod config;
pub mod input;
pub mod raster;
pub mod sink;
pub mod stroke;
pub mod style;
pub mod surface;

pub use config::{ConfigError, ConfigResult, SurfaceConfig};
pub use input::{PointerAction, PointerEvent};
pub use raster::{Frame, InkCanvas, PixelSize, RasterBuffer};
pub use sink::{Ink, InkPoint, InkRecorder, InkStroke, NullSink, StrokeSink};
pub use stroke::InProgressStroke;
pub use style::{InkColor, LineCap, LineJoin, STROKE_WIDTH_DP, StrokeStyle};
pub use surface::{DrawingSurface, SurfaceCallbacks, SurfaceError, SurfaceResult, SurfaceState};
