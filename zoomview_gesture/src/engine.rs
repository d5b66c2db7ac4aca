// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture-to-transform state machine.

use kurbo::{Point, Size, Vec2};
use log::{debug, trace};
use zoomview_transform::{ConfigError, PanBounds, SurfaceTransform, ZoomLimits};

use crate::event::{EventOutcome, PointerAction, PointerEvent, ScaleGesture};
use crate::pointer::PointerTracker;

/// Current interaction mode of a [`ZoomEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureMode {
    /// No pointer is down.
    #[default]
    None,
    /// A single pointer is down; moves pan the content when zoomed in.
    Drag,
    /// Two or more pointers are down; pinch updates scale the content.
    Zoom,
}

/// Converts pointer events into a zoom/pan transform for one surface.
///
/// The engine owns the transform, the accumulated scale and the gesture mode.
/// Every event is consumed and produces a new transform; nothing about event
/// handling can fail. The accumulated scale always stays inside the
/// configured [`ZoomLimits`], and panning never moves the scaled content far
/// enough to uncover the surface edges.
///
/// ```
/// use kurbo::{Point, Size};
/// use zoomview_gesture::{PointerEvent, ScaleGesture, ZoomEngine};
///
/// let mut engine = ZoomEngine::new(Size::new(400.0, 300.0));
/// engine.configure(1.0, 5.0).unwrap();
///
/// let focus = Point::new(200.0, 150.0);
/// engine.handle_pointer_event(&PointerEvent::down(focus));
/// engine.handle_pointer_event(&PointerEvent::pointer_down(focus));
/// let outcome = engine.handle_pointer_event(
///     &PointerEvent::moved(focus).with_scale(ScaleGesture::new(2.0, focus)),
/// );
///
/// assert!(outcome.consumed);
/// assert_eq!(engine.save_scale(), 2.0);
/// assert_eq!(outcome.transform.scale(), 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct ZoomEngine {
    limits: ZoomLimits,
    save_scale: f64,
    mode: GestureMode,
    transform: SurfaceTransform,
    pointer: PointerTracker,
    surface_size: Size,
}

impl ZoomEngine {
    /// Creates an engine for a surface of `surface_size` with default limits.
    #[must_use]
    pub fn new(surface_size: Size) -> Self {
        Self::with_limits(surface_size, ZoomLimits::default())
    }

    /// Creates an engine with the given zoom limits.
    ///
    /// The content starts at `min_scale`, anchored at the surface origin.
    #[must_use]
    pub fn with_limits(surface_size: Size, limits: ZoomLimits) -> Self {
        let min_scale = limits.min_scale();
        Self {
            limits,
            save_scale: min_scale,
            mode: GestureMode::None,
            transform: SurfaceTransform::new(min_scale, Vec2::ZERO),
            pointer: PointerTracker::default(),
            surface_size,
        }
    }

    /// Sets both zoom bounds.
    ///
    /// On success the accumulated scale is clamped into the new range,
    /// pivoting on the surface center.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if `min_scale < 1.0`,
    /// `max_scale < min_scale`, or either bound is not finite. The engine is
    /// left unchanged in that case.
    pub fn configure(&mut self, min_scale: f64, max_scale: f64) -> Result<(), ConfigError> {
        let limits = ZoomLimits::new(min_scale, max_scale)?;
        self.apply_limits(limits);
        Ok(())
    }

    /// Sets the lower zoom bound, validating it against the current upper bound.
    ///
    /// # Errors
    ///
    /// Fails if `scale < 1.0` or `scale > max_scale`.
    pub fn set_min_scale(&mut self, scale: f64) -> Result<(), ConfigError> {
        let mut limits = self.limits;
        limits.set_min_scale(scale)?;
        self.apply_limits(limits);
        Ok(())
    }

    /// Sets the upper zoom bound, validating it against the current lower bound.
    ///
    /// # Errors
    ///
    /// Fails if `scale < 1.0` or `scale < min_scale`.
    pub fn set_max_scale(&mut self, scale: f64) -> Result<(), ConfigError> {
        let mut limits = self.limits;
        limits.set_max_scale(scale)?;
        self.apply_limits(limits);
        Ok(())
    }

    /// Returns the configured zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Returns the accumulated scale factor.
    #[must_use]
    pub fn save_scale(&self) -> f64 {
        self.save_scale
    }

    /// Returns the current gesture mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Returns a snapshot of the current transform.
    #[must_use]
    pub fn current_transform(&self) -> SurfaceTransform {
        self.transform
    }

    /// Returns the surface size the pan bounds are computed against.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    /// Updates the surface size, pulling the pan back into the new bounds.
    pub fn set_surface_size(&mut self, size: Size) {
        if self.surface_size == size {
            return;
        }
        debug!(
            "surface resized {}x{} -> {}x{}",
            self.surface_size.width, self.surface_size.height, size.width, size.height
        );
        self.surface_size = size;
        self.clamp_translation();
    }

    /// Returns the current pan range.
    #[must_use]
    pub fn pan_bounds(&self) -> PanBounds {
        PanBounds::new(self.surface_size, self.save_scale)
    }

    /// Drops any gesture in progress and returns to `min_scale` with no pan.
    pub fn reset(&mut self) {
        *self = Self::with_limits(self.surface_size, self.limits);
    }

    /// Feeds one pointer event and returns the resulting transform.
    ///
    /// A pinch update attached to the event is applied first (and switches to
    /// [`GestureMode::Zoom`]), then the pointer action is dispatched.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> EventOutcome {
        if let Some(gesture) = event.scale {
            self.set_mode(GestureMode::Zoom);
            self.apply_pinch(gesture);
        }

        match event.action {
            PointerAction::Down => {
                self.pointer.start(event.position);
                self.set_mode(GestureMode::Drag);
            }
            PointerAction::PointerDown => {
                self.pointer.start(event.position);
                self.set_mode(GestureMode::Zoom);
            }
            PointerAction::Move => self.pan_to(event.position),
            PointerAction::Up | PointerAction::PointerUp => {
                self.pointer.end();
                self.set_mode(GestureMode::None);
            }
        }

        trace!(
            "{:?} at ({}, {}): scale {} translation {:?}",
            event.action,
            event.position.x,
            event.position.y,
            self.save_scale,
            self.transform.translation()
        );
        EventOutcome {
            transform: self.transform,
            consumed: true,
        }
    }

    fn set_mode(&mut self, mode: GestureMode) {
        if self.mode != mode {
            debug!("gesture mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    fn apply_limits(&mut self, limits: ZoomLimits) {
        debug!(
            "zoom limits set to [{}, {}]",
            limits.min_scale(),
            limits.max_scale()
        );
        self.limits = limits;
        let clamped = limits.clamp(self.save_scale);
        if clamped != self.save_scale {
            let center = Point::new(self.surface_size.width / 2.0, self.surface_size.height / 2.0);
            self.apply_pinch(ScaleGesture::new(clamped / self.save_scale, center));
        }
    }

    fn apply_pinch(&mut self, gesture: ScaleGesture) {
        if !gesture.factor.is_finite() || gesture.factor <= 0.0 {
            return;
        }
        let orig = self.save_scale;
        let requested = orig * gesture.factor;
        self.save_scale = self.limits.clamp(requested);
        // Keep the matrix in lockstep with the accumulator when the limits cut the pinch short.
        let factor = if self.save_scale == requested {
            gesture.factor
        } else {
            self.save_scale / orig
        };
        self.transform.post_scale_about(factor, gesture.focus);
        if factor < 1.0 {
            self.clamp_translation();
        }
    }

    fn pan_to(&mut self, position: Point) {
        let can_pan = match self.mode {
            GestureMode::None => false,
            GestureMode::Drag | GestureMode::Zoom => self.save_scale > self.limits.min_scale(),
        };
        if !can_pan {
            return;
        }
        let Some(delta) = self.pointer.update(position) else {
            return;
        };
        let delta = self
            .pan_bounds()
            .clamp_delta(self.transform.translation(), delta);
        self.transform.post_translate(delta);
    }

    fn clamp_translation(&mut self) {
        let correction = self.pan_bounds().correction(self.transform.translation());
        self.transform.post_translate(correction);
    }
}
