//! Wind decomposition relative to the line of play.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShotError};
use crate::units::Velocity;

/// Ambient wind. `bearing_deg` is the compass direction the wind blows
/// *from*, clockwise from north (0 = northerly wind).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindVector {
    pub speed_mph: f64,
    pub bearing_deg: f64,
}

impl WindVector {
    pub fn new(speed: Velocity, bearing_deg: f64) -> Result<Self> {
        let wind = Self {
            speed_mph: speed.as_mph(),
            bearing_deg,
        };
        wind.validate()?;
        Ok(wind)
    }

    pub fn calm() -> Self {
        Self {
            speed_mph: 0.0,
            bearing_deg: 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.speed_mph.is_finite() || self.speed_mph < 0.0 {
            return Err(ShotError::InvalidInput(format!(
                "wind speed must be a non-negative number, got {}",
                self.speed_mph
            )));
        }
        if !self.bearing_deg.is_finite() || !(0.0..360.0).contains(&self.bearing_deg) {
            return Err(ShotError::InvalidInput(format!(
                "wind bearing must be in [0, 360), got {}",
                self.bearing_deg
            )));
        }
        Ok(())
    }
}

impl Default for WindVector {
    fn default() -> Self {
        Self::calm()
    }
}

impl fmt::Display for WindVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mph@{}", self.speed_mph, self.bearing_deg)
    }
}

/// Parses `"<speed>@<bearing>"`, e.g. `"10mph@270"` or `"4.5mps@45"`.
/// A bare `"calm"` is zero wind.
impl std::str::FromStr for WindVector {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("calm") {
            return Ok(Self::calm());
        }
        let (speed, bearing) = s.split_once('@').ok_or_else(|| {
            ShotError::InvalidInput(format!("expected '<speed>@<bearing>', got {s:?}"))
        })?;
        let speed: Velocity = speed.parse().map_err(ShotError::InvalidInput)?;
        let bearing: f64 = bearing
            .trim()
            .parse()
            .map_err(|_| ShotError::InvalidInput(format!("invalid wind bearing in {s:?}")))?;
        Self::new(speed, bearing)
    }
}

/// Wind split along and across the target line, in mph.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindComponents {
    /// Positive = blowing into the player (headwind), negative = tailwind.
    pub headwind: f64,
    /// Positive = wind from the right of the target line (ball moves left),
    /// negative = from the left.
    pub crosswind: f64,
}

/// Decompose `wind` relative to a target bearing in radians.
pub fn resolve(wind: &WindVector, target_bearing_rad: f64) -> Result<WindComponents> {
    wind.validate()?;
    if !target_bearing_rad.is_finite() {
        return Err(ShotError::InvalidInput(format!(
            "target bearing must be finite, got {target_bearing_rad}"
        )));
    }

    let relative = wind.bearing_deg.to_radians() - target_bearing_rad;
    Ok(WindComponents {
        headwind: relative.cos() * wind.speed_mph,
        crosswind: relative.sin() * wind.speed_mph,
    })
}
