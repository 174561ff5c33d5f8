//! Proportional Edit Configuration
//!
//! [`Configuration`] is the host-visible settings block shared by every
//! session: the falloff shape, the drag sensitivity and the mode toggles.
//! It is edited both by the host UI and by the session controller's scroll
//! and key handling, and it can be persisted as JSON.
//!
//! # Scroll Tiers
//!
//! Scroll adjustments scale with the current magnitude so that small radii
//! can be tuned finely while large ones still move quickly:
//!
//! | parameter        | condition             | step                    |
//! |------------------|-----------------------|-------------------------|
//! | radius, power    | value < 0.05          | 0.001                   |
//! | radius, power    | 0.05 ≤ value < 0.16   | 0.0075                  |
//! | radius, power    | value ≥ 0.16          | 0.0125                  |
//! | falloff exponent | any                   | 0.01 + 0.1·√exponent    |
//!
//! Values are always clamped, never rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::input::ScrollDirection;

pub const RADIUS_MIN: f32 = 0.001;
pub const POWER_MIN: f32 = 0.001;
pub const POWER_MAX: f32 = 1.0;
pub const EXPONENT_MIN: f32 = 0.1;
pub const EXPONENT_MAX: f32 = 6.0;

const FINE_TIER_END: f32 = 0.05;
const MEDIUM_TIER_END: f32 = 0.16;
const FINE_STEP: f32 = 0.001;
const MEDIUM_STEP: f32 = 0.0075;
const COARSE_STEP: f32 = 0.0125;

// ---------------------------------------------------------------------------
// FocusedParameter
// ---------------------------------------------------------------------------

/// The scalar the scroll wheel currently edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusedParameter {
    #[default]
    Radius,
    Power,
    FalloffExponent,
}

impl FocusedParameter {
    /// Radius → Power → FalloffExponent → Radius.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Radius => Self::Power,
            Self::Power => Self::FalloffExponent,
            Self::FalloffExponent => Self::Radius,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Radius => "Radius",
            Self::Power => "Power",
            Self::FalloffExponent => "Falloff",
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Settings for proportional pose editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Feature flag; sessions refuse to start while this is off.
    pub enabled: bool,
    /// Falloff radius in world units.
    pub radius: f32,
    /// Drag sensitivity.
    pub power: f32,
    /// Shape of the falloff curve ("smoothness").
    pub falloff_exponent: f32,
    /// Restrict the edit to selected bones (plus the active bone).
    pub affect_selected_only: bool,
    /// Use the active bone's head as the pivot instead of the selection mean.
    pub use_active_as_center: bool,
    /// Translate sessions only: bones rotate to follow the drag.
    pub simulation_cloth: bool,
    /// Cloth mode only: distant bones rotate more strongly than near ones.
    pub invert_falloff: bool,
    /// Which scalar the scroll wheel edits.
    pub focused_parameter: FocusedParameter,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            enabled: false,
            radius: 0.3,
            power: 0.5,
            falloff_exponent: 2.0,
            affect_selected_only: false,
            use_active_as_center: false,
            simulation_cloth: false,
            invert_falloff: false,
            focused_parameter: FocusedParameter::Radius,
        }
    }
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings with the feature flag switched on.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Returns a copy with every scalar clamped into its valid range.
    ///
    /// Non-finite values fall back to the defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.radius.is_finite() {
            self.radius = defaults.radius;
        }
        if !self.power.is_finite() {
            self.power = defaults.power;
        }
        if !self.falloff_exponent.is_finite() {
            self.falloff_exponent = defaults.falloff_exponent;
        }
        self.radius = self.radius.max(RADIUS_MIN);
        self.power = self.power.clamp(POWER_MIN, POWER_MAX);
        self.falloff_exponent = self.falloff_exponent.clamp(EXPONENT_MIN, EXPONENT_MAX);
        self
    }

    /// Current value of the given scalar.
    #[must_use]
    pub fn value(&self, parameter: FocusedParameter) -> f32 {
        match parameter {
            FocusedParameter::Radius => self.radius,
            FocusedParameter::Power => self.power,
            FocusedParameter::FalloffExponent => self.falloff_exponent,
        }
    }

    /// Size of the next scroll step for the given scalar at its current value.
    #[must_use]
    pub fn scroll_step(&self, parameter: FocusedParameter) -> f32 {
        match parameter {
            FocusedParameter::Radius => tiered_step(self.radius),
            FocusedParameter::Power => tiered_step(self.power),
            FocusedParameter::FalloffExponent => exponent_step(self.falloff_exponent),
        }
    }

    /// Applies one scroll notch to the focused scalar and returns its new value.
    pub fn scroll(&mut self, direction: ScrollDirection) -> f32 {
        let parameter = self.focused_parameter;
        let step = self.scroll_step(parameter);
        let delta = match direction {
            ScrollDirection::Up => step,
            ScrollDirection::Down => -step,
        };

        match parameter {
            FocusedParameter::Radius => {
                self.radius = (self.radius + delta).max(RADIUS_MIN);
            }
            FocusedParameter::Power => {
                self.power = (self.power + delta).clamp(POWER_MIN, POWER_MAX);
            }
            FocusedParameter::FalloffExponent => {
                self.falloff_exponent =
                    (self.falloff_exponent + delta).clamp(EXPONENT_MIN, EXPONENT_MAX);
            }
        }

        self.value(parameter)
    }

    /// Resets the toggles that only live for the duration of a session.
    pub fn clear_session_toggles(&mut self) {
        self.simulation_cloth = false;
        self.invert_falloff = false;
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Parses a configuration from JSON. Missing fields take their defaults
    /// and out-of-range scalars are clamped.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded proportional edit settings from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        Ok(())
    }
}

fn tiered_step(value: f32) -> f32 {
    if value < FINE_TIER_END {
        FINE_STEP
    } else if value < MEDIUM_TIER_END {
        MEDIUM_STEP
    } else {
        COARSE_STEP
    }
}

fn exponent_step(exponent: f32) -> f32 {
    0.01 + 0.1 * exponent.max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(tiered_step(0.0), FINE_STEP);
        assert_eq!(tiered_step(0.049), FINE_STEP);
        assert_eq!(tiered_step(0.049_999_5), FINE_STEP);
        assert_eq!(tiered_step(0.05), MEDIUM_STEP);
        assert_eq!(tiered_step(0.159), MEDIUM_STEP);
        assert_eq!(tiered_step(0.16), COARSE_STEP);
        assert_eq!(tiered_step(2.0), COARSE_STEP);
    }

    #[test]
    fn focus_cycles_through_all_parameters() {
        let start = FocusedParameter::Radius;
        assert_eq!(start.next(), FocusedParameter::Power);
        assert_eq!(start.next().next(), FocusedParameter::FalloffExponent);
        assert_eq!(start.next().next().next(), start);
    }
}
