// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch recognition.
//!
//! [`ScaleDetector`] turns the positions of all active pointers into
//! incremental [`ScaleGesture`] updates. The span of the pointers is twice
//! their mean distance from the focal point (their centroid); each update
//! reports the ratio of the current span to the previous one.
//!
//! Hosts that already have a platform pinch recognizer can skip this type and
//! attach its output to [`PointerEvent`](crate::PointerEvent)s directly.
//!
//! ```
//! use kurbo::Point;
//! use zoomview_gesture::scale::ScaleDetector;
//!
//! let mut detector = ScaleDetector::new();
//! // Two fingers land 100px apart; the first sample only establishes the span.
//! assert!(detector.update(&[Point::new(100.0, 100.0), Point::new(200.0, 100.0)]).is_none());
//!
//! // They spread to 200px apart around the same center.
//! let gesture = detector
//!     .update(&[Point::new(50.0, 100.0), Point::new(250.0, 100.0)])
//!     .unwrap();
//! assert_eq!(gesture.factor, 2.0);
//! assert_eq!(gesture.focus, Point::new(150.0, 100.0));
//! ```

use kurbo::{Point, Vec2};

use crate::event::ScaleGesture;

/// Spans below this many pixels are too small to divide by reliably.
pub const MIN_SPAN: f64 = 1.0;

/// Incremental pinch recognizer over raw pointer positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleDetector {
    previous_span: Option<f64>,
    pointer_count: usize,
}

impl ScaleDetector {
    /// Creates an idle detector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the current positions of every active pointer.
    ///
    /// Returns a [`ScaleGesture`] once two or more pointers have been seen in
    /// consecutive updates. When the number of pointers changes the span is
    /// rebased and no update is reported for that sample.
    pub fn update(&mut self, pointers: &[Point]) -> Option<ScaleGesture> {
        if pointers.len() < 2 {
            self.reset();
            return None;
        }
        let (focus, span) = focus_and_span(pointers);
        if pointers.len() != self.pointer_count {
            self.pointer_count = pointers.len();
            self.previous_span = Some(span);
            return None;
        }
        let previous = self.previous_span.replace(span)?;
        if previous < MIN_SPAN || span < MIN_SPAN {
            return None;
        }
        Some(ScaleGesture::new(span / previous, focus))
    }

    /// Forgets the current pinch.
    pub fn reset(&mut self) {
        self.previous_span = None;
        self.pointer_count = 0;
    }

    /// Returns `true` while two or more pointers are being tracked.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.previous_span.is_some()
    }
}

fn focus_and_span(pointers: &[Point]) -> (Point, f64) {
    let count = pointers.len() as f64;
    let sum = pointers
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let focus = (sum / count).to_point();
    let mean_distance = pointers.iter().map(|p| (*p - focus).hypot()).sum::<f64>() / count;
    (focus, mean_distance * 2.0)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{MIN_SPAN, ScaleDetector};

    #[test]
    fn single_pointer_never_scales() {
        let mut detector = ScaleDetector::new();
        assert!(detector.update(&[Point::new(10.0, 10.0)]).is_none());
        assert!(detector.update(&[Point::new(20.0, 10.0)]).is_none());
        assert!(!detector.is_in_progress());
    }

    #[test]
    fn pinching_in_reports_factor_below_one() {
        let mut detector = ScaleDetector::new();
        detector.update(&[Point::new(0.0, 0.0), Point::new(200.0, 0.0)]);
        let gesture = detector
            .update(&[Point::new(50.0, 0.0), Point::new(150.0, 0.0)])
            .unwrap();
        assert_eq!(gesture.factor, 0.5);
        assert_eq!(gesture.focus, Point::new(100.0, 0.0));
    }

    #[test]
    fn updates_are_incremental() {
        let mut detector = ScaleDetector::new();
        detector.update(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        let first = detector
            .update(&[Point::new(0.0, 0.0), Point::new(200.0, 0.0)])
            .unwrap();
        let second = detector
            .update(&[Point::new(0.0, 0.0), Point::new(300.0, 0.0)])
            .unwrap();
        assert_eq!(first.factor, 2.0);
        assert!((second.factor - 1.5).abs() < 1e-12);
    }

    #[test]
    fn pointer_count_change_rebases_span() {
        let mut detector = ScaleDetector::new();
        detector.update(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        let rebased = detector.update(&[
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 300.0),
        ]);
        assert!(rebased.is_none());
        assert!(detector.is_in_progress());
    }

    #[test]
    fn lifting_fingers_resets() {
        let mut detector = ScaleDetector::new();
        detector.update(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        detector.update(&[Point::new(0.0, 0.0)]);
        assert!(!detector.is_in_progress());
        assert!(
            detector
                .update(&[Point::new(0.0, 0.0), Point::new(400.0, 0.0)])
                .is_none()
        );
    }

    #[test]
    fn degenerate_span_is_ignored() {
        let mut detector = ScaleDetector::new();
        let p = Point::new(40.0, 40.0);
        detector.update(&[p, p]);
        let next = detector.update(&[p, Point::new(40.0 + MIN_SPAN * 10.0, 40.0)]);
        assert!(next.is_none());
    }
}
