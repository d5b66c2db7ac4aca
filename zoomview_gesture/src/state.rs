// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted zoom configuration, kept across surface re-creation.

use zoomview_transform::ZoomLimits;

/// Key under which the lower zoom bound is persisted.
pub const MIN_SCALE_KEY: &str = "minScale";

/// Key under which the upper zoom bound is persisted.
pub const MAX_SCALE_KEY: &str = "maxScale";

/// Key under which the surface's own opaque state is persisted.
pub const SURFACE_STATE_KEY: &str = "superState";

/// Saved zoom bounds plus the rendering surface's own state.
///
/// Each bound is stored under its own key (see [`MIN_SCALE_KEY`],
/// [`MAX_SCALE_KEY`]); the surface state under [`SURFACE_STATE_KEY`]. The
/// bounds are plain numbers here and are validated again on restore.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedState<T> {
    /// Lower zoom bound at save time.
    #[cfg_attr(feature = "serde", serde(rename = "minScale"))]
    pub min_scale: f64,
    /// Upper zoom bound at save time.
    #[cfg_attr(feature = "serde", serde(rename = "maxScale"))]
    pub max_scale: f64,
    /// Opaque surface state.
    #[cfg_attr(feature = "serde", serde(rename = "superState"))]
    pub surface: T,
}

impl<T> SavedState<T> {
    /// Captures `limits` alongside the surface state.
    #[must_use]
    pub fn new(limits: ZoomLimits, surface: T) -> Self {
        Self {
            min_scale: limits.min_scale(),
            max_scale: limits.max_scale(),
            surface,
        }
    }
}
