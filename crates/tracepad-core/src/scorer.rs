//! Deterministic attempt scoring.

use crate::alphabet::TargetDescriptor;
use crate::attempt::Attempt;
use serde::{Deserialize, Serialize};

/// Attempts with fewer samples than this are rejected outright.
pub const MIN_POINTS: usize = 5;

/// Attempts whose bounding box is narrower or shorter than this (in
/// canvas-pixel units) are treated as accidental touches.
pub const MIN_SPAN: f64 = 50.0;

/// Accuracy at or above this passes.
pub const PASS_THRESHOLD: u8 = 80;

/// Floor of the coverage score once an attempt clears both rejection
/// checks.
pub const COVERAGE_FLOOR: u8 = 10;

/// Pass/fail classification of a scored attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Outcome of scoring one attempt. Derived, never persisted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Accuracy in 0..=100.
    pub accuracy: u8,
    pub verdict: Verdict,
}

impl ScoreResult {
    /// Build a result from an accuracy value, applying the pass threshold.
    pub fn from_accuracy(accuracy: u8) -> Self {
        let verdict = if accuracy >= PASS_THRESHOLD {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        Self { accuracy, verdict }
    }

    /// Whether the attempt passed.
    pub fn is_pass(&self) -> bool {
        self.verdict == Verdict::Pass
    }
}

/// Score a captured attempt against the active practice target.
///
/// Pure and deterministic:
///
/// 1. fewer than [`MIN_POINTS`] samples → accuracy 0 (taps, near-empty
///    attempts);
/// 2. bounding box narrower or shorter than [`MIN_SPAN`] → accuracy 10
///    (drawings confined to a tiny corner);
/// 3. otherwise a coverage ratio of samples drawn to guide strokes
///    expected, clamped to `[10, 100]`.
///
/// The coverage step is the drop-in point for a stronger shape-similarity
/// metric; the surrounding threshold/clamp/verdict contract stays fixed.
pub fn score(attempt: &Attempt, target: &TargetDescriptor) -> ScoreResult {
    if attempt.len() < MIN_POINTS {
        return ScoreResult::from_accuracy(0);
    }

    let spans_surface = match attempt.bounds() {
        Some(bounds) => bounds.width() >= MIN_SPAN && bounds.height() >= MIN_SPAN,
        None => false,
    };
    if !spans_surface {
        return ScoreResult::from_accuracy(COVERAGE_FLOOR);
    }

    let expected = target.guide_stroke_count().max(1);
    let coverage = attempt.len() as f64 / expected as f64 * 100.0;
    let accuracy = coverage.clamp(f64::from(COVERAGE_FLOOR), 100.0) as u8;

    ScoreResult::from_accuracy(accuracy)
}
