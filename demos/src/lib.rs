// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Zoomview demos.
//!
//! - [`recording_surface`]: a [`RenderSurface`](zoomview_gesture::RenderSurface)
//!   that records what it is asked to draw instead of drawing it.
//! - [`touch_script`]: turns per-frame finger positions into the pointer
//!   events a platform would deliver.

pub mod recording_surface;
pub mod touch_script;
