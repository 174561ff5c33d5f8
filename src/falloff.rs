//! Weight Field
//!
//! Maps a bone's distance from the pivot to an influence weight:
//!
//! ```text
//! weight(d, r, e) = max(0.003, ((r - d) / r)^e)      for d < r
//! ```
//!
//! Bones at or beyond the radius get no field weight at all (`None`); the
//! transform applicator decides what happens to them. The 0.003 floor keeps
//! bones near the boundary from freezing numerically.
//!
//! In cloth mode with an inverted falloff, a second, increasing weight
//! `max(0.003, (d / r)^e)` drives how strongly bones rotate to follow the
//! drag. Displacement always uses the normal decreasing weight.

use crate::config::Configuration;

/// Lower bound for any in-radius weight.
pub const MIN_WEIGHT: f32 = 0.003;

/// Decreasing falloff weight, `None` when `distance >= radius`.
#[must_use]
pub fn falloff_weight(distance: f32, radius: f32, exponent: f32) -> Option<f32> {
    if radius <= 0.0 || distance >= radius {
        return None;
    }
    let t = ((radius - distance) / radius).max(0.0);
    Some(t.powf(exponent).max(MIN_WEIGHT))
}

/// Increasing falloff weight used for inverted rotation-follow.
#[must_use]
pub fn inverse_weight(distance: f32, radius: f32, exponent: f32) -> Option<f32> {
    if radius <= 0.0 || distance >= radius {
        return None;
    }
    let t = (distance / radius).max(0.0);
    Some(t.powf(exponent).max(MIN_WEIGHT))
}

/// Unfloored weight at a ring of the given radius, as drawn by the overlay.
#[must_use]
pub fn ring_weight(distance: f32, radius: f32, exponent: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    ((radius - distance) / radius).max(0.0).powf(exponent)
}

/// The pair of weights sampled for one in-radius bone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FalloffWeights {
    /// Scales the positional delta.
    pub motion: f32,
    /// Scales rotation-follow and the rotate variant's angle.
    pub rotation: f32,
}

/// Falloff parameters captured for one recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FalloffField {
    pub radius: f32,
    pub exponent: f32,
    /// Rotation weight increases with distance instead of decreasing.
    pub inverted: bool,
}

impl FalloffField {
    #[must_use]
    pub fn new(radius: f32, exponent: f32) -> Self {
        Self {
            radius,
            exponent,
            inverted: false,
        }
    }

    /// Field for a translate session; inversion only applies in cloth mode.
    #[must_use]
    pub fn for_translate(config: &Configuration) -> Self {
        Self {
            radius: config.radius,
            exponent: config.falloff_exponent,
            inverted: config.simulation_cloth && config.invert_falloff,
        }
    }

    /// Field for a rotate session; never inverted.
    #[must_use]
    pub fn for_rotate(config: &Configuration) -> Self {
        Self::new(config.radius, config.falloff_exponent)
    }

    /// Strict `<`: a bone exactly at the radius is outside.
    #[inline]
    #[must_use]
    pub fn contains(&self, distance: f32) -> bool {
        distance < self.radius
    }

    #[must_use]
    pub fn sample(&self, distance: f32) -> Option<FalloffWeights> {
        if !self.contains(distance) {
            return None;
        }
        let motion = falloff_weight(distance, self.radius, self.exponent)?;
        let rotation = if self.inverted {
            inverse_weight(distance, self.radius, self.exponent)?
        } else {
            motion
        };
        Some(FalloffWeights { motion, rotation })
    }
}
