// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use thiserror::Error;

/// Default lower zoom bound: content exactly fills the surface.
pub const DEFAULT_MIN_SCALE: f64 = 1.0;

/// Default upper zoom bound.
pub const DEFAULT_MAX_SCALE: f64 = 5.0;

/// Why a pair of zoom bounds was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigRejection {
    /// `min_scale` is below `1.0`, which would shrink content below the surface size.
    MinBelowOne,
    /// `max_scale` is below `min_scale`.
    MaxBelowMin,
    /// One of the bounds is NaN or infinite.
    NonFinite,
}

impl fmt::Display for ConfigRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MinBelowOne => "min_scale can't be lower than 1",
            Self::MaxBelowMin => "max_scale can't be lower than min_scale",
            Self::NonFinite => "scale bounds must be finite",
        })
    }
}

/// Error returned when zoom bounds are configured with invalid values.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The requested `[min_scale, max_scale]` range violates the zoom invariants.
    #[error("invalid zoom configuration [{min_scale}, {max_scale}]: {reason}")]
    InvalidConfiguration {
        /// Requested lower bound.
        min_scale: f64,
        /// Requested upper bound.
        max_scale: f64,
        /// Which rule was violated.
        reason: ConfigRejection,
    },
}

impl ConfigError {
    /// Returns the violated rule.
    #[must_use]
    pub fn reason(&self) -> ConfigRejection {
        match self {
            Self::InvalidConfiguration { reason, .. } => *reason,
        }
    }
}

/// Validated zoom range `[min_scale, max_scale]` with `1.0 <= min_scale <= max_scale`.
///
/// The only ways to obtain a `ZoomLimits` are [`ZoomLimits::default`],
/// [`ZoomLimits::new`] and (with the `serde` feature) deserialization, all of
/// which enforce the invariant. The setters leave the limits untouched when
/// they fail.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ZoomLimits {
    min_scale: f64,
    max_scale: f64,
}

impl ZoomLimits {
    /// Creates a validated zoom range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if either bound is not
    /// finite, if `min_scale < 1.0`, or if `max_scale < min_scale`.
    pub fn new(min_scale: f64, max_scale: f64) -> Result<Self, ConfigError> {
        let reject = |reason| ConfigError::InvalidConfiguration {
            min_scale,
            max_scale,
            reason,
        };
        if !min_scale.is_finite() || !max_scale.is_finite() {
            return Err(reject(ConfigRejection::NonFinite));
        }
        if min_scale < 1.0 {
            return Err(reject(ConfigRejection::MinBelowOne));
        }
        if max_scale < min_scale {
            return Err(reject(ConfigRejection::MaxBelowMin));
        }
        Ok(Self {
            min_scale,
            max_scale,
        })
    }

    /// Returns the lower zoom bound.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the upper zoom bound.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Replaces the lower bound, validating it against the current upper bound.
    ///
    /// # Errors
    ///
    /// Fails if `scale < 1.0` or `scale > max_scale`.
    pub fn set_min_scale(&mut self, scale: f64) -> Result<(), ConfigError> {
        *self = Self::new(scale, self.max_scale)?;
        Ok(())
    }

    /// Replaces the upper bound, validating it against the current lower bound.
    ///
    /// # Errors
    ///
    /// Fails if `scale < 1.0` or `scale < min_scale`.
    pub fn set_max_scale(&mut self, scale: f64) -> Result<(), ConfigError> {
        *self = Self::new(self.min_scale, scale)?;
        Ok(())
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Returns `true` if `scale` lies inside the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.min_scale..=self.max_scale).contains(&scale)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}

// Unvalidated wire shape; missing keys fall back to the defaults.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawZoomLimits {
    #[serde(default = "default_min_scale")]
    min_scale: f64,
    #[serde(default = "default_max_scale")]
    max_scale: f64,
}

#[cfg(feature = "serde")]
fn default_min_scale() -> f64 {
    DEFAULT_MIN_SCALE
}

#[cfg(feature = "serde")]
fn default_max_scale() -> f64 {
    DEFAULT_MAX_SCALE
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ZoomLimits {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <RawZoomLimits as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Self::new(raw.min_scale, raw.max_scale).map_err(serde::de::Error::custom)
    }
}
