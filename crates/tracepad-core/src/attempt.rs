//! Captured drawing attempts.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A single captured sample within an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampledPoint {
    /// Position in canvas-pixel coordinates.
    pub pos: Point,
    /// True if this sample opened a new stroke (first sample after pen-down).
    pub stroke_start: bool,
}

impl SampledPoint {
    /// Sample that begins a new stroke.
    pub fn stroke_start(pos: Point) -> Self {
        Self { pos, stroke_start: true }
    }

    /// Sample that continues the current stroke.
    pub fn continuation(pos: Point) -> Self {
        Self { pos, stroke_start: false }
    }
}

/// Everything drawn since the surface was last cleared.
///
/// Points are appended in time order. `stroke_start` samples partition the
/// sequence into disjoint strokes; a stroke with no continuation points is
/// still valid (a single tap).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attempt {
    points: Vec<SampledPoint>,
}

impl Attempt {
    /// Create a new empty attempt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to the attempt.
    pub fn push(&mut self, sample: SampledPoint) {
        self.points.push(sample);
    }

    /// All samples in capture order.
    pub fn points(&self) -> &[SampledPoint] {
        &self.points
    }

    /// Total number of captured samples across all strokes.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if nothing has been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of strokes (pen-down/pen-up cycles) in the attempt.
    pub fn stroke_count(&self) -> usize {
        self.points.iter().filter(|p| p.stroke_start).count()
    }

    /// Iterate over the strokes as contiguous sample slices.
    pub fn strokes(&self) -> impl Iterator<Item = &[SampledPoint]> {
        StrokeIter { points: &self.points, next: 0 }
    }

    /// Axis-aligned bounding box of all samples, or `None` if empty.
    pub fn bounds(&self) -> Option<Rect> {
        if self.points.is_empty() {
            return None;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for sample in &self.points {
            min_x = min_x.min(sample.pos.x);
            min_y = min_y.min(sample.pos.y);
            max_x = max_x.max(sample.pos.x);
            max_y = max_y.max(sample.pos.y);
        }

        Some(Rect::new(min_x, min_y, max_x, max_y))
    }

    /// Remove all samples.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Iterator over the stroke partitions of an attempt.
struct StrokeIter<'a> {
    points: &'a [SampledPoint],
    next: usize,
}

impl<'a> Iterator for StrokeIter<'a> {
    type Item = &'a [SampledPoint];

    fn next(&mut self) -> Option<&'a [SampledPoint]> {
        if self.next >= self.points.len() {
            return None;
        }
        let start = self.next;
        let mut end = start + 1;
        while end < self.points.len() && !self.points[end].stroke_start {
            end += 1;
        }
        self.next = end;
        Some(&self.points[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt_with(points: &[(f64, f64, bool)]) -> Attempt {
        let mut attempt = Attempt::new();
        for &(x, y, start) in points {
            let pos = Point::new(x, y);
            attempt.push(if start {
                SampledPoint::stroke_start(pos)
            } else {
                SampledPoint::continuation(pos)
            });
        }
        attempt
    }

    #[test]
    fn test_empty_attempt() {
        let attempt = Attempt::new();
        assert!(attempt.is_empty());
        assert_eq!(attempt.stroke_count(), 0);
        assert!(attempt.bounds().is_none());
    }

    #[test]
    fn test_stroke_partition() {
        let attempt = attempt_with(&[
            (0.0, 0.0, true),
            (10.0, 10.0, false),
            (20.0, 20.0, false),
            (50.0, 50.0, true),
            (60.0, 60.0, false),
        ]);

        assert_eq!(attempt.stroke_count(), 2);

        let strokes: Vec<_> = attempt.strokes().collect();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].len(), 3);
        assert_eq!(strokes[1].len(), 2);
        assert!(strokes[0][0].stroke_start);
        assert!(strokes[1][0].stroke_start);
    }

    #[test]
    fn test_single_tap_is_valid_stroke() {
        let attempt = attempt_with(&[(30.0, 30.0, true)]);

        assert_eq!(attempt.stroke_count(), 1);
        let strokes: Vec<_> = attempt.strokes().collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].len(), 1);
    }

    #[test]
    fn test_bounds() {
        let attempt = attempt_with(&[
            (10.0, 20.0, true),
            (110.0, 20.0, false),
            (60.0, 95.0, false),
        ]);

        let bounds = attempt.bounds().unwrap();
        assert!((bounds.width() - 100.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear() {
        let mut attempt = attempt_with(&[(0.0, 0.0, true), (5.0, 5.0, false)]);
        attempt.clear();
        assert!(attempt.is_empty());
        assert_eq!(attempt.strokes().count(), 0);
    }
}
