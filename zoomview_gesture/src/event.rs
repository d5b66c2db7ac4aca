// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event model consumed by [`ZoomEngine`](crate::ZoomEngine).

use kurbo::Point;
use zoomview_transform::SurfaceTransform;

/// What happened to the pointers in a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// The first pointer touched the surface.
    Down,
    /// An additional pointer touched the surface while another is down.
    PointerDown,
    /// One or more active pointers moved.
    Move,
    /// The last pointer left the surface.
    Up,
    /// A non-last pointer left the surface.
    PointerUp,
}

/// Incremental pinch update, as reported by a scale detector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleGesture {
    /// Scale change since the previous update; `> 1` zooms in, `< 1` zooms out.
    pub factor: f64,
    /// Gesture focal point in surface-local pixels.
    pub focus: Point,
}

impl ScaleGesture {
    /// Creates a pinch update.
    #[must_use]
    pub fn new(factor: f64, focus: Point) -> Self {
        Self { factor, focus }
    }
}

/// A single pointer event in surface-local coordinates.
///
/// `position` is the primary pointer. When a pinch is in progress the host
/// attaches the detector's [`ScaleGesture`]; the engine applies it before
/// dispatching `action`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Kind of pointer transition.
    pub action: PointerAction,
    /// Primary pointer position.
    pub position: Point,
    /// Pinch update accompanying this event, if any.
    pub scale: Option<ScaleGesture>,
}

impl PointerEvent {
    /// Creates an event without a pinch update.
    #[must_use]
    pub fn new(action: PointerAction, position: Point) -> Self {
        Self {
            action,
            position,
            scale: None,
        }
    }

    /// First pointer down at `position`.
    #[must_use]
    pub fn down(position: Point) -> Self {
        Self::new(PointerAction::Down, position)
    }

    /// Additional pointer down; `position` is the primary pointer.
    #[must_use]
    pub fn pointer_down(position: Point) -> Self {
        Self::new(PointerAction::PointerDown, position)
    }

    /// Primary pointer moved to `position`.
    #[must_use]
    pub fn moved(position: Point) -> Self {
        Self::new(PointerAction::Move, position)
    }

    /// Last pointer up.
    #[must_use]
    pub fn up(position: Point) -> Self {
        Self::new(PointerAction::Up, position)
    }

    /// Non-last pointer up.
    #[must_use]
    pub fn pointer_up(position: Point) -> Self {
        Self::new(PointerAction::PointerUp, position)
    }

    /// Attaches a pinch update to this event.
    #[must_use]
    pub fn with_scale(mut self, gesture: ScaleGesture) -> Self {
        self.scale = Some(gesture);
        self
    }
}

/// Result of feeding one event to the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventOutcome {
    /// Transform to apply to the surface after this event.
    pub transform: SurfaceTransform,
    /// Whether the event was consumed. The engine consumes every event.
    pub consumed: bool,
}
