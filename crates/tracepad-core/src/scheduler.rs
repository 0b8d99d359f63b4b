//! Debounced attempt scheduling.

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};
#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

/// Quiet period after the last pen-up before an attempt is scored.
///
/// Long enough that lifting the pen between strokes of a multi-stroke
/// character does not trigger premature scoring.
pub const SCORE_DEBOUNCE: Duration = Duration::from_millis(3000);

/// Scheduler state: either nothing is pending, or one deadline is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchedulerState {
    Idle,
    Pending { deadline: Instant },
}

/// Defers scoring until input has been quiet for [`SCORE_DEBOUNCE`].
///
/// An explicit two-state machine rather than timer-handle bookkeeping:
/// `pen_lifted` arms (or re-arms) the single deadline, `pen_down` or a
/// reset cancels it, and `poll` fires at most once per armed deadline.
/// At most one deadline is ever pending, so no two scoring decisions can
/// be in flight for the same surface.
#[derive(Debug, Clone)]
pub struct AttemptScheduler {
    state: SchedulerState,
    debounce: Duration,
}

impl Default for AttemptScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptScheduler {
    /// Create an idle scheduler with the standard debounce.
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Idle,
            debounce: SCORE_DEBOUNCE,
        }
    }

    /// Create a scheduler with a custom quiet period.
    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            state: SchedulerState::Idle,
            debounce,
        }
    }

    /// The pen was lifted: arm the deadline, replacing any pending one.
    pub fn pen_lifted(&mut self, now: Instant) {
        self.state = SchedulerState::Pending {
            deadline: now + self.debounce,
        };
    }

    /// The pen went back down before the quiet period elapsed: the child
    /// resumed drawing mid-character, so cancel the pending deadline.
    pub fn pen_down(&mut self) {
        self.state = SchedulerState::Idle;
    }

    /// Cancel any pending deadline without a new contact (reset, target
    /// change).
    pub fn cancel(&mut self) {
        self.state = SchedulerState::Idle;
    }

    /// Whether a deadline is currently armed.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, SchedulerState::Pending { .. })
    }

    /// Drive the scheduler. Returns true exactly once per armed deadline,
    /// when the quiet period has elapsed; the caller then scores the
    /// current attempt.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            SchedulerState::Pending { deadline } if now >= deadline => {
                self.state = SchedulerState::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_never_fires() {
        let mut scheduler = AttemptScheduler::new();
        assert!(!scheduler.is_pending());
        assert!(!scheduler.poll(Instant::now()));
    }

    #[test]
    fn test_fires_after_quiet_period() {
        let mut scheduler = AttemptScheduler::new();
        let t0 = Instant::now();

        scheduler.pen_lifted(t0);
        assert!(scheduler.is_pending());

        assert!(!scheduler.poll(t0 + Duration::from_millis(2999)));
        assert!(scheduler.poll(t0 + SCORE_DEBOUNCE));
    }

    #[test]
    fn test_fires_at_most_once() {
        let mut scheduler = AttemptScheduler::new();
        let t0 = Instant::now();

        scheduler.pen_lifted(t0);
        assert!(scheduler.poll(t0 + SCORE_DEBOUNCE));
        assert!(!scheduler.poll(t0 + SCORE_DEBOUNCE * 2));
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn test_pen_down_cancels() {
        let mut scheduler = AttemptScheduler::new();
        let t0 = Instant::now();

        scheduler.pen_lifted(t0);
        scheduler.pen_down();

        assert!(!scheduler.is_pending());
        assert!(!scheduler.poll(t0 + SCORE_DEBOUNCE * 2));
    }

    #[test]
    fn test_relift_rearms_single_deadline() {
        let mut scheduler = AttemptScheduler::new();
        let t0 = Instant::now();

        // Down-up, down again within the quiet period, up again.
        scheduler.pen_lifted(t0);
        scheduler.pen_down();
        scheduler.pen_lifted(t0 + Duration::from_millis(1000));

        // The first deadline is gone; only the re-armed one counts.
        assert!(!scheduler.poll(t0 + SCORE_DEBOUNCE));
        assert!(scheduler.poll(t0 + Duration::from_millis(1000) + SCORE_DEBOUNCE));
        // And it fired exactly once.
        assert!(!scheduler.poll(t0 + Duration::from_millis(10_000)));
    }

    #[test]
    fn test_cancel_clears_pending() {
        let mut scheduler = AttemptScheduler::new();
        let t0 = Instant::now();

        scheduler.pen_lifted(t0);
        scheduler.cancel();
        assert!(!scheduler.poll(t0 + SCORE_DEBOUNCE));
    }

    #[test]
    fn test_custom_debounce() {
        let mut scheduler = AttemptScheduler::with_debounce(Duration::from_millis(100));
        let t0 = Instant::now();

        scheduler.pen_lifted(t0);
        assert!(!scheduler.poll(t0 + Duration::from_millis(99)));
        assert!(scheduler.poll(t0 + Duration::from_millis(100)));
    }
}
