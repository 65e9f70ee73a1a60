use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Yards per meter used by the shot model's distance conversion.
pub const YARDS_PER_METER: f64 = 1.09361;

/// A distance value with unit. Serializes as a suffix string: `"465yd"`,
/// `"425.3m"`, `"12ft"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Yards(f64),
    Meters(f64),
    Feet(f64),
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl std::str::FromStr for Distance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for (suffix, ctor) in &[
            ("yd", Self::Yards as fn(f64) -> Self),
            ("ft", Self::Feet as fn(f64) -> Self),
            ("m", Self::Meters as fn(f64) -> Self),
        ] {
            if let Some(num) = s.strip_suffix(suffix) {
                let v: f64 = num
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid number in distance: {s:?}"))?;
                return Ok(ctor(v));
            }
        }
        Err(format!(
            "invalid distance {s:?}: expected number with suffix (yd, m, ft)"
        ))
    }
}

impl Distance {
    pub fn value(self) -> f64 {
        match self {
            Self::Yards(v) | Self::Meters(v) | Self::Feet(v) => v,
        }
    }

    pub fn unit_suffix(self) -> &'static str {
        match self {
            Self::Yards(_) => "yd",
            Self::Meters(_) => "m",
            Self::Feet(_) => "ft",
        }
    }

    pub fn as_yards(self) -> f64 {
        match self {
            Self::Yards(v) => v,
            Self::Meters(v) => v * YARDS_PER_METER,
            Self::Feet(v) => v / 3.0,
        }
    }

    pub fn as_meters(self) -> f64 {
        match self {
            Self::Yards(v) => v / YARDS_PER_METER,
            Self::Meters(v) => v,
            Self::Feet(v) => v / 3.0 / YARDS_PER_METER,
        }
    }

    /// Re-express in the unit system's long-distance unit (yards or meters).
    pub fn in_system(self, system: UnitSystem) -> Distance {
        match system {
            UnitSystem::Imperial => Self::Yards(self.as_yards()),
            UnitSystem::Metric => Self::Meters(self.as_meters()),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), self.unit_suffix())
    }
}

/// A velocity value with unit. Serializes as a suffix string: `"10mph"`,
/// `"4.5mps"`, `"16kph"`, `"14.7fps"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Velocity {
    MilesPerHour(f64),
    FeetPerSecond(f64),
    MetersPerSecond(f64),
    KilometersPerHour(f64),
}

impl Serialize for Velocity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Velocity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl std::str::FromStr for Velocity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Try each suffix longest-first to avoid "mps" matching before "mph"
        for (suffix, ctor) in &[
            ("mph", Self::MilesPerHour as fn(f64) -> Self),
            ("mps", Self::MetersPerSecond as fn(f64) -> Self),
            ("kph", Self::KilometersPerHour as fn(f64) -> Self),
            ("fps", Self::FeetPerSecond as fn(f64) -> Self),
        ] {
            if let Some(num) = s.strip_suffix(suffix) {
                let v: f64 = num
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid number in velocity: {s:?}"))?;
                return Ok(ctor(v));
            }
        }
        // Bare numbers are taken as mph, the model's native unit.
        s.parse::<f64>().map(Self::MilesPerHour).map_err(|_| {
            format!("invalid velocity {s:?}: expected number with suffix (mph, mps, kph, fps)")
        })
    }
}

impl Velocity {
    pub fn value(self) -> f64 {
        match self {
            Self::MilesPerHour(v)
            | Self::FeetPerSecond(v)
            | Self::MetersPerSecond(v)
            | Self::KilometersPerHour(v) => v,
        }
    }

    pub fn unit_suffix(self) -> &'static str {
        match self {
            Self::MilesPerHour(_) => "mph",
            Self::FeetPerSecond(_) => "fps",
            Self::MetersPerSecond(_) => "mps",
            Self::KilometersPerHour(_) => "kph",
        }
    }

    pub fn as_mph(self) -> f64 {
        match self {
            Self::MilesPerHour(v) => v,
            Self::FeetPerSecond(v) => v * 0.681818,
            Self::MetersPerSecond(v) => v * 2.23694,
            Self::KilometersPerHour(v) => v * 0.621371,
        }
    }

    pub fn as_kph(self) -> f64 {
        match self {
            Self::MilesPerHour(v) => v * 1.60934,
            Self::FeetPerSecond(v) => v * 1.09728,
            Self::MetersPerSecond(v) => v * 3.6,
            Self::KilometersPerHour(v) => v,
        }
    }

    pub fn in_system(self, system: UnitSystem) -> Velocity {
        match system {
            UnitSystem::Imperial => Self::MilesPerHour(self.as_mph()),
            UnitSystem::Metric => Self::KilometersPerHour(self.as_kph()),
        }
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), self.unit_suffix())
    }
}

/// Unit system for display. Imperial = yards/mph, Metric = meters/kph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "imperial"),
            Self::Metric => write!(f, "metric"),
        }
    }
}
