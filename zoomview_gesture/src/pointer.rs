// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking: per-event movement deltas for panning.
//!
//! ## Usage
//!
//! 1) Call [`PointerTracker::start`] when a pointer goes down.
//! 2) On each move, call [`PointerTracker::update`] to get the delta since the last update.
//! 3) Call [`PointerTracker::end`] when the gesture finishes.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use zoomview_gesture::pointer::PointerTracker;
//!
//! let mut tracker = PointerTracker::default();
//! tracker.start(Point::new(100.0, 100.0));
//!
//! let delta = tracker.update(Point::new(150.0, 120.0));
//! assert_eq!(delta, Some(Vec2::new(50.0, 20.0)));
//! assert_eq!(tracker.total_offset(Point::new(150.0, 120.0)), Some(Vec2::new(50.0, 20.0)));
//! ```

use kurbo::{Point, Vec2};

/// Gesture-start and last observed pointer positions.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct PointerTracker {
    /// Position where the current gesture started.
    pub start_pos: Option<Point>,
    /// Last position consumed by [`PointerTracker::update`].
    pub last_pos: Option<Point>,
}

impl PointerTracker {
    /// Begin tracking from `pos`, replacing any previous gesture.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Record `pos` and return the movement since the last recorded position.
    ///
    /// Returns `None` when no gesture is being tracked.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Offset of `current_pos` from the gesture start.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Stop tracking.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a gesture is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }
}
