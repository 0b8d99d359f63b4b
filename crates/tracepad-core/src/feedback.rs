//! Verdict feedback: overlay state, celebration, completion callback.

use crate::scorer::ScoreResult;

/// Callback invoked with the accuracy of each scored attempt.
pub type CompletionCallback = Box<dyn FnMut(u8)>;

/// Transient verdict overlay shown over the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// No verdict to show.
    #[default]
    Hidden,
    /// The attempt passed.
    Correct,
    /// The attempt failed.
    Incorrect,
}

/// Renders verdicts and forwards accuracy to the progress collaborator.
///
/// The overlay and celebration flag are purely presentational: a host that
/// ignores them loses nothing but visuals. The completion callback is the
/// engine's single outbound interface and fires exactly once per scored
/// attempt.
#[derive(Default)]
pub struct FeedbackEmitter {
    overlay: OverlayState,
    celebration: bool,
    on_complete: Option<CompletionCallback>,
}

impl FeedbackEmitter {
    /// Create an emitter with no callback attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the completion callback, replacing any previous one.
    pub fn set_on_complete(&mut self, callback: CompletionCallback) {
        self.on_complete = Some(callback);
    }

    /// Report a scored attempt.
    pub fn emit(&mut self, result: &ScoreResult) {
        self.overlay = if result.is_pass() {
            OverlayState::Correct
        } else {
            OverlayState::Incorrect
        };
        if result.is_pass() {
            self.celebration = true;
        }

        log::debug!(
            "attempt scored: accuracy={} verdict={:?}",
            result.accuracy,
            result.verdict
        );

        if let Some(callback) = self.on_complete.as_mut() {
            callback(result.accuracy);
        }
    }

    /// Current overlay state.
    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    /// Take the one-shot celebration flag. Returns true at most once per
    /// passing attempt; the host fires its confetti and moves on.
    pub fn take_celebration(&mut self) -> bool {
        std::mem::take(&mut self.celebration)
    }

    /// Hide the overlay and drop any unconsumed celebration.
    pub fn clear(&mut self) {
        self.overlay = OverlayState::Hidden;
        self.celebration = false;
    }
}

/// Encouragement line for a given accuracy, tiered the way the practice
/// page displays it.
pub fn encouragement(accuracy: u8) -> &'static str {
    if accuracy > 90 {
        "Excellent! Perfect tracing!"
    } else if accuracy > 80 {
        "Great job! Very good tracing!"
    } else if accuracy > 70 {
        "Good effort! Keep practicing!"
    } else {
        "Nice try! Let's practice more!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_pass_sets_correct_overlay_and_celebration() {
        let mut emitter = FeedbackEmitter::new();

        emitter.emit(&ScoreResult::from_accuracy(95));

        assert_eq!(emitter.overlay(), OverlayState::Correct);
        assert!(emitter.take_celebration());
        // One-shot: a second take returns false.
        assert!(!emitter.take_celebration());
    }

    #[test]
    fn test_fail_sets_incorrect_overlay_without_celebration() {
        let mut emitter = FeedbackEmitter::new();

        emitter.emit(&ScoreResult::from_accuracy(40));

        assert_eq!(emitter.overlay(), OverlayState::Incorrect);
        assert!(!emitter.take_celebration());
    }

    #[test]
    fn test_callback_fires_once_per_emit() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut emitter = FeedbackEmitter::new();
        emitter.set_on_complete(Box::new(move |accuracy| {
            sink.borrow_mut().push(accuracy);
        }));

        emitter.emit(&ScoreResult::from_accuracy(85));
        emitter.emit(&ScoreResult::from_accuracy(30));

        assert_eq!(*seen.borrow(), vec![85, 30]);
    }

    #[test]
    fn test_clear_hides_overlay() {
        let mut emitter = FeedbackEmitter::new();
        emitter.emit(&ScoreResult::from_accuracy(100));

        emitter.clear();

        assert_eq!(emitter.overlay(), OverlayState::Hidden);
        assert!(!emitter.take_celebration());
    }

    #[test]
    fn test_encouragement_tiers() {
        assert_eq!(encouragement(95), "Excellent! Perfect tracing!");
        assert_eq!(encouragement(85), "Great job! Very good tracing!");
        assert_eq!(encouragement(75), "Good effort! Keep practicing!");
        assert_eq!(encouragement(10), "Nice try! Let's practice more!");
    }
}
