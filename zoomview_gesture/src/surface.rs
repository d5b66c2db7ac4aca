// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding the engine to a rendering surface.

use kurbo::{Affine, Size};
use log::debug;
use zoomview_transform::{ConfigError, ZoomLimits};

use crate::engine::ZoomEngine;
use crate::event::PointerEvent;
use crate::state::SavedState;

/// A drawable surface that displays frames under an affine transform.
///
/// This is the seam to the platform: a texture view, a GPU layer, a canvas.
/// The frames themselves come from elsewhere (a media player, for example).
pub trait RenderSurface {
    /// Opaque state the surface wants persisted alongside the zoom bounds.
    type State;

    /// Current size of the surface in pixels.
    fn size(&self) -> Size;

    /// Replaces the transform used to draw content.
    fn set_transform(&mut self, transform: Affine);

    /// Requests a redraw.
    fn invalidate(&mut self);

    /// Captures the surface's own state.
    fn save_state(&self) -> Self::State;

    /// Restores state previously returned by [`RenderSurface::save_state`].
    fn restore_state(&mut self, state: Self::State);
}

/// A [`RenderSurface`] driven by a [`ZoomEngine`].
///
/// Each pointer event is fed to the engine, and the resulting transform is
/// pushed to the surface followed by a redraw request.
#[derive(Clone, Debug)]
pub struct ZoomableSurface<S> {
    surface: S,
    engine: ZoomEngine,
}

impl<S: RenderSurface> ZoomableSurface<S> {
    /// Wraps `surface` with default zoom limits.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_limits(surface, ZoomLimits::default())
    }

    /// Wraps `surface` with the given zoom limits.
    #[must_use]
    pub fn with_limits(surface: S, limits: ZoomLimits) -> Self {
        let engine = ZoomEngine::with_limits(surface.size(), limits);
        let mut zoomable = Self { surface, engine };
        zoomable.sync_surface();
        zoomable
    }

    /// Returns the wrapped surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the wrapped surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the gesture engine.
    #[must_use]
    pub fn engine(&self) -> &ZoomEngine {
        &self.engine
    }

    /// Sets both zoom bounds and pushes the resulting transform to the surface.
    ///
    /// # Errors
    ///
    /// See [`ZoomEngine::configure`].
    pub fn configure(&mut self, min_scale: f64, max_scale: f64) -> Result<(), ConfigError> {
        self.engine.configure(min_scale, max_scale)?;
        self.sync_surface();
        Ok(())
    }

    /// Handles a pointer event, updating and redrawing the surface.
    ///
    /// Always returns `true`: the surface consumes every pointer event.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        self.engine.set_surface_size(self.surface.size());
        let outcome = self.engine.handle_pointer_event(event);
        self.surface.set_transform(outcome.transform.affine());
        self.surface.invalidate();
        outcome.consumed
    }

    /// Captures the zoom bounds and the surface state.
    #[must_use]
    pub fn save_state(&self) -> SavedState<S::State> {
        SavedState::new(self.engine.limits(), self.surface.save_state())
    }

    /// Restores a [`SavedState`], assigning each bound from its own field.
    ///
    /// The surface state is restored first; the bounds are then validated
    /// exactly as by [`ZoomableSurface::configure`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if the saved bounds are
    /// invalid. The surface state has been restored, but the zoom bounds keep
    /// their previous values.
    pub fn restore_state(&mut self, state: SavedState<S::State>) -> Result<(), ConfigError> {
        self.surface.restore_state(state.surface);
        debug!(
            "restoring zoom limits [{}, {}]",
            state.min_scale, state.max_scale
        );
        self.configure(state.min_scale, state.max_scale)
    }

    fn sync_surface(&mut self) {
        self.surface
            .set_transform(self.engine.current_transform().affine());
        self.surface.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use kurbo::{Affine, Point, Size};
    use zoomview_transform::ZoomLimits;

    use super::{RenderSurface, ZoomableSurface};
    use crate::event::{PointerEvent, ScaleGesture};
    use crate::state::SavedState;

    #[derive(Debug, Default)]
    struct FakeSurface {
        transforms: Vec<Affine>,
        redraws: usize,
        state: u32,
    }

    impl RenderSurface for FakeSurface {
        type State = u32;

        fn size(&self) -> Size {
            Size::new(320.0, 240.0)
        }

        fn set_transform(&mut self, transform: Affine) {
            self.transforms.push(transform);
        }

        fn invalidate(&mut self) {
            self.redraws += 1;
        }

        fn save_state(&self) -> u32 {
            self.state
        }

        fn restore_state(&mut self, state: u32) {
            self.state = state;
        }
    }

    #[test]
    fn each_event_pushes_one_transform_and_one_redraw() {
        let mut zoomable = ZoomableSurface::new(FakeSurface::default());
        let initial = zoomable.surface().transforms.len();
        let p = Point::new(160.0, 120.0);

        for event in [
            PointerEvent::down(p),
            PointerEvent::pointer_down(p),
            PointerEvent::moved(p).with_scale(ScaleGesture::new(2.0, p)),
            PointerEvent::pointer_up(p),
        ] {
            assert!(zoomable.on_pointer_event(&event));
        }

        let surface = zoomable.surface();
        assert_eq!(surface.transforms.len() - initial, 4);
        assert_eq!(surface.redraws, surface.transforms.len());
        assert_eq!(
            surface.transforms.last().copied(),
            Some(zoomable.engine().current_transform().affine())
        );
        assert_eq!(zoomable.engine().save_scale(), 2.0);
    }

    #[test]
    fn engine_picks_up_surface_size() {
        let mut zoomable = ZoomableSurface::new(FakeSurface::default());
        zoomable.on_pointer_event(&PointerEvent::down(Point::ZERO));
        assert_eq!(zoomable.engine().surface_size(), Size::new(320.0, 240.0));
    }

    #[test]
    fn save_and_restore_keep_both_bounds() {
        let mut original = ZoomableSurface::with_limits(
            FakeSurface {
                state: 42,
                ..FakeSurface::default()
            },
            ZoomLimits::new(1.5, 3.0).unwrap(),
        );
        let saved = original.save_state();
        assert_eq!(saved.min_scale, 1.5);
        assert_eq!(saved.max_scale, 3.0);

        let mut restored = ZoomableSurface::new(FakeSurface::default());
        restored.restore_state(saved).unwrap();
        assert_eq!(restored.engine().limits(), ZoomLimits::new(1.5, 3.0).unwrap());
        assert_eq!(restored.surface().state, 42);

        original.surface_mut().state = 0;
        assert_eq!(original.save_state().surface, 0);
    }

    #[test]
    fn restoring_invalid_bounds_fails_and_keeps_limits() {
        let mut zoomable = ZoomableSurface::new(FakeSurface::default());
        let bad = SavedState {
            min_scale: 0.25,
            max_scale: 5.0,
            surface: 9,
        };
        assert!(zoomable.restore_state(bad).is_err());
        assert_eq!(zoomable.engine().limits(), ZoomLimits::default());
    }
}
