// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomview Transform: surface transform primitives for pinch‑zoom views.
//!
//! This crate provides the small, headless pieces a zoomable rendering
//! surface needs:
//! - [`SurfaceTransform`]: a uniform scale + translate transform, updated with
//!   "post" operations in view space.
//! - [`ZoomLimits`]: a validated `[min_scale, max_scale]` range.
//! - [`PanBounds`]: the translation range that keeps scaled content covering
//!   the whole surface.
//!
//! It does **not** interpret input. Gesture handling lives in
//! `zoomview_gesture`, which drives these primitives from pointer events.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use zoomview_transform::{PanBounds, SurfaceTransform, ZoomLimits};
//!
//! let limits = ZoomLimits::new(1.0, 4.0).unwrap();
//! let surface = Size::new(800.0, 600.0);
//!
//! // Zoom in by 2x about the surface center.
//! let scale = limits.clamp(2.0);
//! let mut transform = SurfaceTransform::IDENTITY;
//! transform.post_scale_about(scale, Point::new(400.0, 300.0));
//!
//! // Try to drag the content far to the right; the pan is clamped so the
//! // left edge of the content stays on the left edge of the surface.
//! let bounds = PanBounds::new(surface, scale);
//! let delta = bounds.clamp_delta(transform.translation(), Vec2::new(1_000.0, 0.0));
//! transform.post_translate(delta);
//! assert_eq!(transform.translation().x, 0.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: serialize/deserialize [`ZoomLimits`] using the `minScale` /
//!   `maxScale` keys. Deserialization validates the bounds.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod bounds;
mod limits;
mod transform;

pub use bounds::PanBounds;
pub use limits::{
    ConfigError, ConfigRejection, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ZoomLimits,
};
pub use transform::SurfaceTransform;
