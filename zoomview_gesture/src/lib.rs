// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomview Gesture: pinch‑zoom and pan for rendering surfaces.
//!
//! This crate turns a stream of multi‑touch pointer events into a uniform
//! scale + translate transform for a rendering surface, the way a zoomable
//! video view does:
//!
//! - One finger drags the content around once it is zoomed in.
//! - Two fingers pinch to zoom about their focal point.
//! - Zoom stays within configurable [`ZoomLimits`], and panning never
//!   uncovers anything outside the scaled content.
//!
//! The pieces:
//!
//! - [`ZoomEngine`]: the gesture state machine ([`GestureMode`]) that owns the
//!   transform and the accumulated scale.
//! - [`pointer`]: per‑event pointer deltas used for panning.
//! - [`scale`]: a small two‑finger pinch recognizer producing [`ScaleGesture`]s.
//! - [`RenderSurface`] / [`ZoomableSurface`]: the seam to whatever actually
//!   draws the frames, plus [`SavedState`] persistence of the zoom bounds.
//!
//! Event handling is synchronous and never fails. Only configuration can be
//! rejected, with [`ConfigError`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use zoomview_gesture::{PointerEvent, ScaleDetector, ZoomEngine};
//!
//! let mut engine = ZoomEngine::new(Size::new(400.0, 300.0));
//! let mut detector = ScaleDetector::new();
//!
//! // Two fingers land and spread apart: the content doubles in size.
//! let (a, b) = (Point::new(150.0, 150.0), Point::new(250.0, 150.0));
//! engine.handle_pointer_event(&PointerEvent::down(a));
//! detector.update(&[a, b]);
//! engine.handle_pointer_event(&PointerEvent::pointer_down(a));
//!
//! let (a, b) = (Point::new(100.0, 150.0), Point::new(300.0, 150.0));
//! let mut event = PointerEvent::moved(a);
//! if let Some(gesture) = detector.update(&[a, b]) {
//!     event = event.with_scale(gesture);
//! }
//! let outcome = engine.handle_pointer_event(&event);
//! assert_eq!(outcome.transform.scale(), 2.0);
//!
//! // Lift both fingers, then drag with one: the pan is clamped to the content.
//! engine.handle_pointer_event(&PointerEvent::pointer_up(a));
//! engine.handle_pointer_event(&PointerEvent::up(b));
//! engine.handle_pointer_event(&PointerEvent::down(Point::new(10.0, 10.0)));
//! let outcome = engine.handle_pointer_event(&PointerEvent::moved(Point::new(900.0, 10.0)));
//! assert_eq!(outcome.transform.translation(), Vec2::new(0.0, -150.0));
//! ```
//!
//! ## Logging
//!
//! Mode transitions and configuration changes are reported at `debug` level
//! through the [`log`] facade; every processed event is reported at `trace`.
//!
//! ## Features
//!
//! - `serde`: serialize/deserialize [`SavedState`] and [`ZoomLimits`].
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod engine;
mod event;
pub mod pointer;
pub mod scale;
mod state;
mod surface;

pub use engine::{GestureMode, ZoomEngine};
pub use event::{EventOutcome, PointerAction, PointerEvent, ScaleGesture};
pub use scale::ScaleDetector;
pub use state::{MAX_SCALE_KEY, MIN_SCALE_KEY, SURFACE_STATE_KEY, SavedState};
pub use surface::{RenderSurface, ZoomableSurface};
pub use zoomview_transform::{ConfigError, ConfigRejection, SurfaceTransform, ZoomLimits};
