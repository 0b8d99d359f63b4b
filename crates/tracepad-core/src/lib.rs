//! TracePad Core Library
//!
//! Platform-agnostic stroke-capture and scoring engine for the TracePad
//! handwriting-practice surface. The host feeds pointer events into a
//! [`TracingSurface`] and polls it; the engine partitions the input into
//! strokes, waits out the quiet period, scores the attempt
//! deterministically, and reports the verdict through the feedback
//! emitter and completion callback.

pub mod alphabet;
pub mod attempt;
pub mod capture;
pub mod feedback;
pub mod progress;
pub mod scheduler;
pub mod scorer;
pub mod storage;
pub mod surface;

pub use alphabet::{builtin_catalog, AlphabetError, TargetDescriptor};
pub use attempt::{Attempt, SampledPoint};
pub use capture::{CaptureEvent, StrokeCapture, StrokeObserver, SurfaceMetrics};
pub use feedback::{encouragement, FeedbackEmitter, OverlayState};
pub use progress::{stars_for, ProgressBook, ProgressRecord, ProgressTracker};
pub use scheduler::{AttemptScheduler, SCORE_DEBOUNCE};
pub use scorer::{score, ScoreResult, Verdict};
pub use surface::TracingSurface;
