//! The tracing surface: capture, scheduling, scoring, and feedback wired
//! together for one practice item.

use crate::alphabet::TargetDescriptor;
use crate::capture::{CaptureEvent, StrokeCapture, StrokeObserver, SurfaceMetrics};
use crate::feedback::{CompletionCallback, FeedbackEmitter, OverlayState};
use crate::scheduler::AttemptScheduler;
use crate::scorer::{self, ScoreResult};
use kurbo::Point;

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// One child-facing practice surface.
///
/// Data flows one direction: capture → scheduler → scorer → emitter. The
/// host feeds pointer events and polls the surface from its event loop;
/// everything in between is synchronous and single-threaded.
pub struct TracingSurface {
    metrics: SurfaceMetrics,
    capture: StrokeCapture,
    scheduler: AttemptScheduler,
    emitter: FeedbackEmitter,
    target: TargetDescriptor,
    observers: Vec<Box<dyn StrokeObserver>>,
}

impl TracingSurface {
    /// Create a surface for the given practice target.
    pub fn new(target: TargetDescriptor, metrics: SurfaceMetrics) -> Self {
        Self {
            metrics,
            capture: StrokeCapture::new(),
            scheduler: AttemptScheduler::new(),
            emitter: FeedbackEmitter::new(),
            target,
            observers: Vec::new(),
        }
    }

    /// Attach the completion callback invoked once per scored attempt.
    pub fn set_on_complete(&mut self, callback: CompletionCallback) {
        self.emitter.set_on_complete(callback);
    }

    /// Register a rendering-side observer of accepted samples.
    pub fn add_observer(&mut self, observer: Box<dyn StrokeObserver>) {
        self.observers.push(observer);
    }

    /// Handle a pen-down at the given client-space position.
    pub fn pointer_down(&mut self, client: Point) {
        let pos = self.metrics.to_surface(client);
        if let Some(event) = self.capture.pointer_down(pos) {
            // Resumed drawing: any pending scoring deadline is stale.
            self.scheduler.pen_down();
            self.emitter.clear();
            self.notify(event);
        }
    }

    /// Handle a pointer move at the given client-space position.
    pub fn pointer_move(&mut self, client: Point) {
        let pos = self.metrics.to_surface(client);
        if let Some(event) = self.capture.pointer_move(pos) {
            self.notify(event);
        }
    }

    /// Handle a pen-up: the attempt stays intact and the scoring deadline
    /// is armed (or re-armed).
    pub fn pointer_up(&mut self, now: Instant) {
        self.capture.pointer_up();
        self.scheduler.pen_lifted(now);
    }

    /// Drive the surface. When the quiet period elapses, scores the
    /// captured attempt exactly once, emits feedback, and consumes the
    /// attempt; the drawn ink stays visible and a fresh attempt begins at
    /// the next pen-down.
    pub fn poll(&mut self, now: Instant) -> Option<ScoreResult> {
        if !self.scheduler.poll(now) {
            return None;
        }

        let result = scorer::score(self.capture.attempt(), &self.target);
        self.emitter.emit(&result);
        self.capture.clear();
        Some(result)
    }

    /// Explicit reset: empty the attempt, cancel any pending deadline,
    /// hide feedback, and tell observers to erase their ink.
    pub fn clear(&mut self) {
        self.capture.clear();
        self.scheduler.cancel();
        self.emitter.clear();
        for observer in &mut self.observers {
            observer.surface_cleared();
        }
    }

    /// Switch to a new practice item. Implies a full reset.
    pub fn set_target(&mut self, target: TargetDescriptor) {
        self.clear();
        log::info!("practice target changed to {}", target.glyph);
        self.target = target;
    }

    /// The active practice target.
    pub fn target(&self) -> &TargetDescriptor {
        &self.target
    }

    /// The attempt captured so far.
    pub fn attempt(&self) -> &crate::attempt::Attempt {
        self.capture.attempt()
    }

    /// Current verdict overlay.
    pub fn overlay(&self) -> OverlayState {
        self.emitter.overlay()
    }

    /// Take the one-shot celebration flag for a passing attempt.
    pub fn take_celebration(&mut self) -> bool {
        self.emitter.take_celebration()
    }

    /// Whether a scoring deadline is armed.
    pub fn is_scoring_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Update the client-to-canvas mapping (surface moved or resized).
    pub fn set_metrics(&mut self, metrics: SurfaceMetrics) {
        self.metrics = metrics;
    }

    fn notify(&mut self, event: CaptureEvent) {
        for observer in &mut self.observers {
            observer.sample_accepted(event);
        }
    }
}
