//! Headless host driving a drawing surface.

use crate::{AppConfig, AppResult};
use inkpad_core::{DrawingSurface, InkColor, PointerEvent, StrokeSink, SurfaceCallbacks};
use inkpad_render::{PixmapBuffer, PixmapFrame};
use serde::{Deserialize, Serialize};

/// A callback the host delivers to the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// The view was laid out at a new size.
    Resize { width: i32, height: i32 },
    /// A pointer sample.
    Pointer { event: PointerEvent },
    /// Application code asked for a blank canvas.
    Clear,
    /// The host wants the surface painted, whether or not it asked for it.
    Frame,
}

/// Owns a surface and the frame it is displayed in.
///
/// After every dispatched event the host presents a new frame if the surface
/// requested a redraw. A [`HostEvent::Frame`] repaints unconditionally.
pub struct HeadlessHost<S> {
    surface: DrawingSurface<PixmapBuffer, S>,
    frame: Option<PixmapFrame>,
    background: InkColor,
    /// Last size delivered to the surface, (0, 0) before the first layout.
    size: (i32, i32),
    frames_presented: usize,
}

impl<S: StrokeSink> HeadlessHost<S> {
    /// Create the surface from `config` and lay it out at the configured size.
    pub fn new(config: &AppConfig, sink: S) -> AppResult<Self> {
        log::info!("Starting {} at {}x{}", config.title, config.width, config.height);
        let mut host = Self {
            surface: DrawingSurface::from_config(&config.surface, sink),
            frame: None,
            background: config.background,
            size: (0, 0),
            frames_presented: 0,
        };
        host.dispatch(&HostEvent::Resize {
            width: config.width,
            height: config.height,
        })?;
        Ok(host)
    }

    /// Deliver one event, then present if a redraw is pending.
    pub fn dispatch(&mut self, event: &HostEvent) -> AppResult<()> {
        match *event {
            HostEvent::Resize { width, height } => {
                let (old_width, old_height) = self.size;
                self.surface.on_size_changed(width, height, old_width, old_height)?;
                self.frame = Some(PixmapFrame::new(width as u32, height as u32, self.background)?);
                self.size = (width, height);
            }
            HostEvent::Pointer { ref event } => {
                self.surface.on_pointer_event(event);
            }
            HostEvent::Clear => self.surface.clear()?,
            HostEvent::Frame => {
                self.draw_frame();
            }
        }
        self.present();
        Ok(())
    }

    /// Deliver events in order, stopping at the first error.
    pub fn run<'a>(&mut self, events: impl IntoIterator<Item = &'a HostEvent>) -> AppResult<()> {
        for event in events {
            self.dispatch(event)?;
        }
        log::info!("Presented {} frames", self.frames_presented);
        Ok(())
    }

    /// Repaint the frame if the surface asked for it. Returns whether a frame was drawn.
    pub fn present(&mut self) -> bool {
        if !self.surface.take_redraw_request() {
            return false;
        }
        self.draw_frame()
    }

    /// Clear the frame and paint the surface into it. Returns false before the first layout.
    pub fn draw_frame(&mut self) -> bool {
        let Some(frame) = self.frame.as_mut() else {
            return false;
        };
        frame.clear();
        self.surface.on_draw(frame);
        self.frames_presented += 1;
        true
    }

    pub fn surface(&self) -> &DrawingSurface<PixmapBuffer, S> {
        &self.surface
    }

    /// The visible output as of the last present.
    pub fn frame(&self) -> Option<&PixmapFrame> {
        self.frame.as_ref()
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }
}
