//! Replay of recorded pointer traces through the practice engine.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracepad_core::{
    builtin_catalog, AlphabetError, ScoreResult, SurfaceMetrics, TracingSurface, SCORE_DEBOUNCE,
};

/// Canvas size traces are recorded against.
const TRACE_CANVAS: f64 = 400.0;

/// Errors raised while loading or replaying a trace.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read trace file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode trace: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no practice character '{0}' in the catalog")]
    UnknownGlyph(String),
    #[error(transparent)]
    Catalog(#[from] AlphabetError),
}

/// One recorded pointer event, offset in milliseconds from trace start.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    Down { t_ms: u64, x: f64, y: f64 },
    Move { t_ms: u64, x: f64, y: f64 },
    Up { t_ms: u64 },
}

impl TraceEvent {
    fn offset_ms(&self) -> u64 {
        match *self {
            TraceEvent::Down { t_ms, .. }
            | TraceEvent::Move { t_ms, .. }
            | TraceEvent::Up { t_ms } => t_ms,
        }
    }
}

/// A recorded practice session against one character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedTrace {
    /// Glyph to practice; defaults to the first catalog entry.
    #[serde(default)]
    pub glyph: Option<String>,
    /// Pointer events in time order.
    pub events: Vec<TraceEvent>,
}

/// What a replayed trace produced.
#[derive(Debug, Clone)]
pub struct ReplaySummary {
    /// Glyph the trace was scored against.
    pub glyph: String,
    /// Every scoring the engine performed, in order. Quiet gaps inside the
    /// trace score mid-replay exactly as they would live.
    pub results: Vec<ScoreResult>,
}

impl ReplaySummary {
    /// The final scoring, if any attempt completed.
    pub fn last(&self) -> Option<&ScoreResult> {
        self.results.last()
    }
}

/// Replay a trace loaded from a JSON file.
pub fn run_file(path: &str) -> Result<ReplaySummary, ReplayError> {
    let json = std::fs::read_to_string(path)?;
    let trace: RecordedTrace = serde_json::from_str(&json)?;
    run(&trace)
}

/// Replay the built-in demo trace.
pub fn run_demo() -> Result<ReplaySummary, ReplayError> {
    run(&demo_trace())
}

/// Drive a trace through a fresh [`TracingSurface`] with a synthetic clock.
pub fn run(trace: &RecordedTrace) -> Result<ReplaySummary, ReplayError> {
    let catalog = builtin_catalog()?;
    let target = match &trace.glyph {
        Some(glyph) => catalog
            .iter()
            .find(|t| &t.glyph == glyph)
            .cloned()
            .ok_or_else(|| ReplayError::UnknownGlyph(glyph.clone()))?,
        None => catalog[0].clone(),
    };

    let glyph = target.glyph.clone();
    log::info!("replaying {} events against {}", trace.events.len(), glyph);

    let mut surface = TracingSurface::new(
        target,
        SurfaceMetrics::identity(Size::new(TRACE_CANVAS, TRACE_CANVAS)),
    );
    surface.set_on_complete(Box::new(|accuracy| {
        log::debug!("completion callback: accuracy={}", accuracy);
    }));

    let base = Instant::now();
    let mut results = Vec::new();
    let mut last_offset = 0;

    for event in &trace.events {
        let now = base + Duration::from_millis(event.offset_ms());
        // A quiet gap before this event may complete the previous attempt.
        if let Some(result) = surface.poll(now) {
            results.push(result);
        }

        match *event {
            TraceEvent::Down { x, y, .. } => surface.pointer_down(Point::new(x, y)),
            TraceEvent::Move { x, y, .. } => surface.pointer_move(Point::new(x, y)),
            TraceEvent::Up { .. } => surface.pointer_up(now),
        }
        last_offset = event.offset_ms();
    }

    let end = base + Duration::from_millis(last_offset) + SCORE_DEBOUNCE;
    if let Some(result) = surface.poll(end) {
        results.push(result);
    }

    Ok(ReplaySummary { glyph, results })
}

/// A two-stroke trace over the first catalog character, recorded by hand.
pub fn demo_trace() -> RecordedTrace {
    let loop_stroke = [
        (0, 120.0, 120.0),
        (60, 170.0, 90.0),
        (120, 230.0, 85.0),
        (180, 290.0, 120.0),
        (240, 315.0, 180.0),
        (300, 290.0, 250.0),
        (360, 230.0, 290.0),
        (420, 170.0, 285.0),
        (480, 120.0, 240.0),
    ];
    let bar_stroke = [
        (1500, 290.0, 120.0),
        (1560, 290.0, 180.0),
        (1620, 290.0, 240.0),
        (1680, 290.0, 290.0),
    ];

    let mut events = Vec::new();
    for (i, &(t_ms, x, y)) in loop_stroke.iter().enumerate() {
        events.push(if i == 0 {
            TraceEvent::Down { t_ms, x, y }
        } else {
            TraceEvent::Move { t_ms, x, y }
        });
    }
    events.push(TraceEvent::Up { t_ms: 600 });
    for (i, &(t_ms, x, y)) in bar_stroke.iter().enumerate() {
        events.push(if i == 0 {
            TraceEvent::Down { t_ms, x, y }
        } else {
            TraceEvent::Move { t_ms, x, y }
        });
    }
    events.push(TraceEvent::Up { t_ms: 1740 });

    RecordedTrace { glyph: None, events }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracepad_core::Verdict;

    #[test]
    fn test_demo_trace_passes() {
        let summary = run_demo().unwrap();

        assert_eq!(summary.glyph, "अ");
        assert_eq!(summary.results.len(), 1);
        let result = summary.last().unwrap();
        assert_eq!(result.verdict, Verdict::Pass);
        assert_eq!(result.accuracy, 100);
    }

    #[test]
    fn test_quiet_gap_scores_mid_trace() {
        // Two strokes separated by more than the debounce window: the
        // first scores on its own before the second begins.
        let mut events = vec![
            TraceEvent::Down { t_ms: 0, x: 50.0, y: 50.0 },
            TraceEvent::Move { t_ms: 50, x: 120.0, y: 120.0 },
            TraceEvent::Move { t_ms: 100, x: 190.0, y: 190.0 },
            TraceEvent::Move { t_ms: 150, x: 260.0, y: 260.0 },
            TraceEvent::Move { t_ms: 200, x: 330.0, y: 330.0 },
            TraceEvent::Up { t_ms: 250 },
        ];
        // Second, too-small attempt long after the first was scored.
        events.extend([
            TraceEvent::Down { t_ms: 5000, x: 50.0, y: 50.0 },
            TraceEvent::Move { t_ms: 5050, x: 55.0, y: 55.0 },
            TraceEvent::Move { t_ms: 5100, x: 60.0, y: 60.0 },
            TraceEvent::Move { t_ms: 5150, x: 62.0, y: 62.0 },
            TraceEvent::Move { t_ms: 5200, x: 65.0, y: 65.0 },
            TraceEvent::Up { t_ms: 5250 },
        ]);

        let trace = RecordedTrace { glyph: Some("अ".to_string()), events };
        let summary = run(&trace).unwrap();

        assert_eq!(summary.results.len(), 2);
        assert_eq!(summary.results[0].verdict, Verdict::Pass);
        assert_eq!(summary.results[1].accuracy, 10);
        assert_eq!(summary.results[1].verdict, Verdict::Fail);
    }

    #[test]
    fn test_trace_ending_pen_down_never_scores() {
        let trace = RecordedTrace {
            glyph: None,
            events: vec![
                TraceEvent::Down { t_ms: 0, x: 50.0, y: 50.0 },
                TraceEvent::Move { t_ms: 50, x: 150.0, y: 150.0 },
            ],
        };

        let summary = run(&trace).unwrap();
        assert!(summary.results.is_empty());
    }

    #[test]
    fn test_unknown_glyph_rejected() {
        let trace = RecordedTrace {
            glyph: Some("Q".to_string()),
            events: vec![],
        };

        assert!(matches!(run(&trace), Err(ReplayError::UnknownGlyph(_))));
    }

    #[test]
    fn test_trace_json_round_trip() {
        let trace = demo_trace();
        let json = serde_json::to_string(&trace).unwrap();
        let decoded: RecordedTrace = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.events.len(), trace.events.len());
        let summary = run(&decoded).unwrap();
        assert_eq!(summary.results.len(), 1);
    }

    #[test]
    fn test_bad_json_is_decode_error() {
        let result: Result<RecordedTrace, _> = serde_json::from_str("{\"events\": 5}");
        assert!(result.is_err());
    }
}
