//! Shot model: wind-adjusted carry and lateral drift.

use serde::{Deserialize, Serialize};

use crate::equipment::{Club, Shape, Trajectory};
use crate::error::{Result, ShotError};
use crate::wind::WindComponents;

/// Yards of carry lost per mph of headwind, before trajectory scaling.
pub const WIND_CARRY_COEFF: f64 = 1.8;
/// Yards of lateral drift per mph of crosswind, before trajectory scaling.
pub const WIND_DRIFT_COEFF: f64 = 1.2;

/// Tunable model parameters. Deserializes as the `[model]` config section;
/// missing keys take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotModel {
    pub wind_carry_coeff: f64,
    pub wind_drift_coeff: f64,
    /// Floor carry at zero. Off by default: a strong enough headwind on a
    /// short club legitimately yields a negative carry.
    pub clamp_carry: bool,
}

impl Default for ShotModel {
    fn default() -> Self {
        Self {
            wind_carry_coeff: WIND_CARRY_COEFF,
            wind_drift_coeff: WIND_DRIFT_COEFF,
            clamp_carry: false,
        }
    }
}

/// Carry and drift for one club/shape/trajectory under given wind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotOutcome {
    pub carry_yards: i32,
    /// Sign follows the crosswind component.
    pub lateral_drift_yards: i32,
}

impl ShotModel {
    /// Coefficients must be finite and non-negative. Config files can carry
    /// `nan` or `inf`, so this runs on load and again before every compute.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("wind_carry_coeff", self.wind_carry_coeff),
            ("wind_drift_coeff", self.wind_drift_coeff),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ShotError::InvalidInput(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn compute(
        &self,
        club: Club,
        shape: Shape,
        trajectory: Trajectory,
        wind: WindComponents,
    ) -> Result<ShotOutcome> {
        self.validate()?;

        let sensitivity = trajectory.wind_sensitivity();
        let base_carry = club.base_carry_yards() * shape.carry_factor();
        let carry_adjustment = -(wind.headwind * self.wind_carry_coeff * sensitivity);

        let mut carry = (base_carry + carry_adjustment).round();
        if self.clamp_carry {
            carry = carry.max(0.0);
        }
        let drift = (wind.crosswind * self.wind_drift_coeff * sensitivity).round();

        Ok(ShotOutcome {
            carry_yards: whole_yards("carry", carry)?,
            lateral_drift_yards: whole_yards("drift", drift)?,
        })
    }
}

/// `as i32` saturates, so out-of-range values are rejected instead.
fn whole_yards(what: &str, yards: f64) -> Result<i32> {
    if yards.is_finite() && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&yards) {
        Ok(yards as i32)
    } else {
        Err(ShotError::InvalidInput(format!("{what} of {yards} yards is out of range")))
    }
}
