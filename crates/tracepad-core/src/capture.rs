//! Stroke capture: pointer events in, attempt samples out.

use crate::attempt::{Attempt, SampledPoint};
use kurbo::{Point, Size};

/// Maps raw client coordinates onto the logical drawing surface.
///
/// Stored points are resolution-independent: client coordinates are
/// translated into surface-local space and scaled by the pixel/display
/// ratio per axis, so a CSS-sized canvas and its backing store agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    /// Top-left corner of the surface in client coordinates.
    pub origin: Point,
    /// Displayed size of the surface in client units.
    pub display_size: Size,
    /// Backing-store size of the surface in canvas pixels.
    pub pixel_size: Size,
}

impl SurfaceMetrics {
    /// Metrics for a surface whose display and pixel sizes coincide.
    pub fn identity(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            display_size: size,
            pixel_size: size,
        }
    }

    /// Translate a client-space point into canvas-pixel coordinates.
    pub fn to_surface(&self, client: Point) -> Point {
        Point::new(
            (client.x - self.origin.x) * self.pixel_size.width / self.display_size.width,
            (client.y - self.origin.y) * self.pixel_size.height / self.display_size.height,
        )
    }
}

/// What a pointer sample did to the attempt, for rendering collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureEvent {
    /// A new stroke began at the point. Renderers must open a fresh path
    /// here rather than connecting back to the previous stroke.
    StrokeStarted(Point),
    /// The active stroke extended from the previous sample to the point.
    StrokeExtended { from: Point, to: Point },
}

/// Rendering-side observer of accepted samples.
///
/// Purely a side channel: observers never influence capture or scoring.
pub trait StrokeObserver {
    /// An accepted sample mutated the attempt.
    fn sample_accepted(&mut self, event: CaptureEvent);

    /// The surface was cleared; any drawn ink should be erased.
    fn surface_cleared(&mut self) {}
}

/// Converts raw pointer events into the attempt's sample sequence.
///
/// Only the primary contact is tracked: a second pointer-down while one is
/// already held is ignored outright, so multi-touch cannot corrupt the
/// stroke partition.
#[derive(Debug, Default)]
pub struct StrokeCapture {
    attempt: Attempt,
    drawing: bool,
}

impl StrokeCapture {
    /// Create an idle capture component with an empty attempt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pen-down at the given canvas-space position.
    ///
    /// Returns the resulting capture event, or `None` if the event was
    /// ignored (contact already down, or non-finite coordinates).
    pub fn pointer_down(&mut self, pos: Point) -> Option<CaptureEvent> {
        if self.drawing {
            return None;
        }
        if !is_finite(pos) {
            log::debug!("dropping pointer-down with non-finite coordinates");
            return None;
        }

        self.drawing = true;
        self.attempt.push(SampledPoint::stroke_start(pos));
        Some(CaptureEvent::StrokeStarted(pos))
    }

    /// Handle a pointer move at the given canvas-space position.
    ///
    /// No-op unless a contact is down.
    pub fn pointer_move(&mut self, pos: Point) -> Option<CaptureEvent> {
        if !self.drawing {
            return None;
        }
        if !is_finite(pos) {
            log::debug!("dropping pointer-move with non-finite coordinates");
            return None;
        }

        let from = self
            .attempt
            .points()
            .last()
            .map(|sample| sample.pos)
            .unwrap_or(pos);
        self.attempt.push(SampledPoint::continuation(pos));
        Some(CaptureEvent::StrokeExtended { from, to: pos })
    }

    /// Handle a pen-up. The attempt is left intact; the caller is expected
    /// to notify the attempt scheduler.
    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    /// Whether a contact is currently held down.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// The attempt captured so far.
    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    /// Discard the captured attempt and any held contact.
    pub fn clear(&mut self) {
        self.attempt.clear();
        self.drawing = false;
    }
}

fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
