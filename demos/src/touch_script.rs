// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converts finger positions, frame by frame, into [`PointerEvent`]s.
//!
//! A platform usually does this for us. Each frame lists the positions of the
//! fingers touching the surface; the first finger is the primary pointer.

use kurbo::Point;
use zoomview_gesture::{PointerAction, PointerEvent, ScaleDetector};

/// Stateful frame-to-event converter.
#[derive(Debug, Default)]
pub struct TouchScript {
    detector: ScaleDetector,
    last_count: usize,
    last_primary: Option<Point>,
}

impl TouchScript {
    /// Creates a converter with no fingers down.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts one frame of finger positions into zero or one pointer event.
    ///
    /// Returns `None` only when no finger was down before or after the frame.
    pub fn frame(&mut self, fingers: &[Point]) -> Option<PointerEvent> {
        let count = fingers.len();
        let previous = self.last_count;
        self.last_count = count;

        let primary = match fingers.first() {
            Some(p) => *p,
            None => {
                self.detector.reset();
                let last = self.last_primary.take()?;
                return (previous > 0).then(|| PointerEvent::up(last));
            }
        };
        self.last_primary = Some(primary);

        let scale = self.detector.update(fingers);
        let action = if previous == 0 {
            PointerAction::Down
        } else if count > previous {
            PointerAction::PointerDown
        } else if count < previous {
            PointerAction::PointerUp
        } else {
            PointerAction::Move
        };
        let event = PointerEvent::new(action, primary);
        Some(match scale {
            Some(gesture) => event.with_scale(gesture),
            None => event,
        })
    }

    /// Converts a whole sequence of frames.
    pub fn run<'a>(&mut self, frames: impl IntoIterator<Item = &'a [Point]>) -> Vec<PointerEvent> {
        frames.into_iter().filter_map(|f| self.frame(f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use zoomview_gesture::PointerAction;

    use super::TouchScript;

    #[test]
    fn one_finger_tap_is_down_then_up() {
        let mut script = TouchScript::new();
        let p = Point::new(10.0, 10.0);
        let events = script.run([&[p][..], &[][..]]);
        let actions: Vec<_> = events.iter().map(|e| e.action).collect();
        assert_eq!(actions, [PointerAction::Down, PointerAction::Up]);
    }

    #[test]
    fn two_finger_spread_produces_scale_update() {
        let mut script = TouchScript::new();
        let frames: [&[Point]; 4] = [
            &[Point::new(150.0, 100.0)],
            &[Point::new(150.0, 100.0), Point::new(250.0, 100.0)],
            &[Point::new(100.0, 100.0), Point::new(300.0, 100.0)],
            &[Point::new(100.0, 100.0)],
        ];
        let events = script.run(frames);
        let actions: Vec<_> = events.iter().map(|e| e.action).collect();
        assert_eq!(
            actions,
            [
                PointerAction::Down,
                PointerAction::PointerDown,
                PointerAction::Move,
                PointerAction::PointerUp,
            ]
        );
        let gesture = events[2].scale.expect("spread should report a pinch");
        assert_eq!(gesture.factor, 2.0);
        assert_eq!(gesture.focus, Point::new(200.0, 100.0));
        assert!(events[3].scale.is_none());
    }

    #[test]
    fn empty_frames_without_fingers_produce_nothing() {
        let mut script = TouchScript::new();
        assert!(script.frame(&[]).is_none());
    }
}
