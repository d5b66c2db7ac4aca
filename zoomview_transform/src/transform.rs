// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform scale + translate transform applied to a rendering surface.
///
/// `SurfaceTransform` maps content coordinates (the unzoomed frame, in surface
/// pixels) into view coordinates. It only ever accumulates uniform scales and
/// translations, so the underlying [`Affine`] always has the shape
/// `[s, 0, 0, s, tx, ty]`.
///
/// Updates are "post" operations: they are applied after the existing
/// transform, in view space, which is how touch input naturally composes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTransform {
    affine: Affine,
}

impl SurfaceTransform {
    /// The identity transform: unscaled, no pan.
    pub const IDENTITY: Self = Self {
        affine: Affine::IDENTITY,
    };

    /// Creates a transform with the given uniform `scale` and `translation`.
    #[must_use]
    pub fn new(scale: f64, translation: Vec2) -> Self {
        Self {
            affine: Affine::new([scale, 0.0, 0.0, scale, translation.x, translation.y]),
        }
    }

    /// Returns the transform as a Kurbo [`Affine`], ready to hand to a surface.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.affine
    }

    /// Returns the uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.affine.as_coeffs()[0]
    }

    /// Returns the translation component in view pixels.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        let [_, _, _, _, tx, ty] = self.affine.as_coeffs();
        Vec2::new(tx, ty)
    }

    /// Scales by `factor` about `pivot` (in view coordinates).
    ///
    /// The pivot stays fixed on screen, so the content under it does not move.
    pub fn post_scale_about(&mut self, factor: f64, pivot: Point) {
        let pivot = pivot.to_vec2();
        self.affine = Affine::translate(pivot)
            * Affine::scale(factor)
            * Affine::translate(-pivot)
            * self.affine;
    }

    /// Translates by `delta` in view pixels.
    pub fn post_translate(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.affine = Affine::translate(delta) * self.affine;
    }

    /// Maps a content‑space point into view space.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        self.affine * pt
    }

    /// Maps a view‑space point (for example a touch position) back into content space.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        self.affine.inverse() * pt
    }
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<SurfaceTransform> for Affine {
    fn from(transform: SurfaceTransform) -> Self {
        transform.affine
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::SurfaceTransform;

    #[test]
    fn identity_has_unit_scale_and_no_pan() {
        let t = SurfaceTransform::default();
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.translation(), Vec2::ZERO);
    }

    #[test]
    fn post_scale_about_keeps_pivot_fixed() {
        let mut t = SurfaceTransform::IDENTITY;
        let pivot = Point::new(200.0, 100.0);
        t.post_scale_about(2.0, pivot);

        assert_eq!(t.scale(), 2.0);
        assert_eq!(t.translation(), Vec2::new(-200.0, -100.0));
        let mapped = t.content_to_view(pivot);
        assert!((mapped.x - pivot.x).abs() < 1e-9);
        assert!((mapped.y - pivot.y).abs() < 1e-9);
    }

    #[test]
    fn scales_compose_multiplicatively() {
        let mut t = SurfaceTransform::IDENTITY;
        t.post_scale_about(2.0, Point::ZERO);
        t.post_scale_about(1.5, Point::new(10.0, 10.0));
        assert!((t.scale() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn post_translate_adds_to_translation() {
        let mut t = SurfaceTransform::new(2.0, Vec2::new(-10.0, -20.0));
        t.post_translate(Vec2::new(5.0, -5.0));
        assert_eq!(t.translation(), Vec2::new(-5.0, -25.0));
        assert_eq!(t.scale(), 2.0);
    }

    #[test]
    fn view_to_content_inverts_content_to_view() {
        let t = SurfaceTransform::new(3.0, Vec2::new(-120.0, -45.0));
        let content = Point::new(33.0, 71.0);
        let back = t.view_to_content(t.content_to_view(content));
        assert!((back.x - content.x).abs() < 1e-9);
        assert!((back.y - content.y).abs() < 1e-9);
    }
}
