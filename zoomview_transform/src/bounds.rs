// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Allowed translation range for content scaled onto a surface.
///
/// Content scaled by `scale` onto a `width × height` surface overhangs it by
/// `right = width·scale − width` horizontally and `bottom = height·scale − height`
/// vertically. Keeping the translation inside `[-right, 0] × [-bottom, 0]`
/// guarantees the surface never shows anything outside the scaled content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    right: f64,
    bottom: f64,
}

impl PanBounds {
    /// Computes the pan range for a surface of `size` showing content at `scale`.
    ///
    /// Negative overhangs (scale below `1.0`, or an empty surface) collapse to zero.
    #[must_use]
    pub fn new(size: Size, scale: f64) -> Self {
        Self {
            right: (size.width * scale - size.width).max(0.0),
            bottom: (size.height * scale - size.height).max(0.0),
        }
    }

    /// Maximum leftward pan, as a positive distance.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Maximum upward pan, as a positive distance.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Returns `true` if `translation` keeps the content covering the surface.
    #[must_use]
    pub fn contains(&self, translation: Vec2) -> bool {
        (-self.right..=0.0).contains(&translation.x)
            && (-self.bottom..=0.0).contains(&translation.y)
    }

    /// Shrinks `delta` so that `translation + delta` stays inside the bounds.
    ///
    /// Each axis is handled independently: overshooting past `0` snaps to `0`,
    /// overshooting past `-right`/`-bottom` snaps to that edge.
    #[must_use]
    pub fn clamp_delta(&self, translation: Vec2, delta: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(translation.x, delta.x, self.right),
            clamp_axis(translation.y, delta.y, self.bottom),
        )
    }

    /// Returns the correction that moves `translation` back inside the bounds.
    ///
    /// This is zero when `translation` is already in range.
    #[must_use]
    pub fn correction(&self, translation: Vec2) -> Vec2 {
        self.clamp_delta(translation, Vec2::ZERO)
    }
}

fn clamp_axis(offset: f64, delta: f64, extent: f64) -> f64 {
    if offset + delta > 0.0 {
        -offset
    } else if offset + delta < -extent {
        -(offset + extent)
    } else {
        delta
    }
}
