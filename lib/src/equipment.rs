//! Equipment catalogs: clubs, ball-flight shapes and launch trajectories.
//!
//! Each catalog is a closed enum in display order. Lookups by identifier are
//! case-insensitive and fail with `UnknownProfile` instead of falling back.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShotError};

/// Golf club with a reference carry distance.
///
/// Variants serialize to short codes (`"DR"`, `"7I"`, etc.) via serde rename
/// and deserialize through [`Club::from_code`], so any casing is accepted.
/// `Display` returns the same code. The putter is not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Club {
    #[serde(rename = "DR")]
    Driver,
    #[serde(rename = "3W")]
    Wood3,
    #[serde(rename = "5W")]
    Wood5,
    #[serde(rename = "7W")]
    Wood7,
    #[serde(rename = "3H")]
    Hybrid3,
    #[serde(rename = "4H")]
    Hybrid4,
    #[serde(rename = "5H")]
    Hybrid5,
    #[serde(rename = "3I")]
    Iron3,
    #[serde(rename = "4I")]
    Iron4,
    #[serde(rename = "5I")]
    Iron5,
    #[serde(rename = "6I")]
    Iron6,
    #[serde(rename = "7I")]
    Iron7,
    #[serde(rename = "8I")]
    Iron8,
    #[serde(rename = "9I")]
    Iron9,
    #[serde(rename = "PW")]
    PitchingWedge,
    #[serde(rename = "GW")]
    GapWedge,
    #[serde(rename = "SW")]
    SandWedge,
    #[serde(rename = "LW")]
    LobWedge,
}

impl Club {
    /// All variants in bag order (driver through lob wedge).
    pub const ALL: &[Club] = &[
        Club::Driver,
        Club::Wood3,
        Club::Wood5,
        Club::Wood7,
        Club::Hybrid3,
        Club::Hybrid4,
        Club::Hybrid5,
        Club::Iron3,
        Club::Iron4,
        Club::Iron5,
        Club::Iron6,
        Club::Iron7,
        Club::Iron8,
        Club::Iron9,
        Club::PitchingWedge,
        Club::GapWedge,
        Club::SandWedge,
        Club::LobWedge,
    ];

    /// Parse a club code case-insensitively.
    pub fn from_code(s: &str) -> Result<Club> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShotError::unknown("club", s))
    }

    pub fn code(&self) -> &'static str {
        match self {
            Club::Driver => "DR",
            Club::Wood3 => "3W",
            Club::Wood5 => "5W",
            Club::Wood7 => "7W",
            Club::Hybrid3 => "3H",
            Club::Hybrid4 => "4H",
            Club::Hybrid5 => "5H",
            Club::Iron3 => "3I",
            Club::Iron4 => "4I",
            Club::Iron5 => "5I",
            Club::Iron6 => "6I",
            Club::Iron7 => "7I",
            Club::Iron8 => "8I",
            Club::Iron9 => "9I",
            Club::PitchingWedge => "PW",
            Club::GapWedge => "GW",
            Club::SandWedge => "SW",
            Club::LobWedge => "LW",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Club::Driver => "Driver",
            Club::Wood3 => "3 Wood",
            Club::Wood5 => "5 Wood",
            Club::Wood7 => "7 Wood",
            Club::Hybrid3 => "3 Hybrid",
            Club::Hybrid4 => "4 Hybrid",
            Club::Hybrid5 => "5 Hybrid",
            Club::Iron3 => "3 Iron",
            Club::Iron4 => "4 Iron",
            Club::Iron5 => "5 Iron",
            Club::Iron6 => "6 Iron",
            Club::Iron7 => "7 Iron",
            Club::Iron8 => "8 Iron",
            Club::Iron9 => "9 Iron",
            Club::PitchingWedge => "Pitching Wedge",
            Club::GapWedge => "Gap Wedge",
            Club::SandWedge => "Sand Wedge",
            Club::LobWedge => "Lob Wedge",
        }
    }

    /// Still-air carry for a stock swing, in yards.
    pub fn base_carry_yards(&self) -> f64 {
        match self {
            Club::Driver => 265.0,
            Club::Wood3 => 240.0,
            Club::Wood5 => 225.0,
            Club::Wood7 => 212.0,
            Club::Hybrid3 => 215.0,
            Club::Hybrid4 => 205.0,
            Club::Hybrid5 => 195.0,
            Club::Iron3 => 205.0,
            Club::Iron4 => 195.0,
            Club::Iron5 => 185.0,
            Club::Iron6 => 175.0,
            Club::Iron7 => 165.0,
            Club::Iron8 => 155.0,
            Club::Iron9 => 145.0,
            Club::PitchingWedge => 135.0,
            Club::GapWedge => 120.0,
            Club::SandWedge => 105.0,
            Club::LobWedge => 90.0,
        }
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Club {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl<'de> Deserialize<'de> for Club {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_code(&s).map_err(de::Error::custom)
    }
}

/// Ball-flight shape. Curving shots trade carry for roll or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    #[default]
    Straight,
    Draw,
    Fade,
    Hook,
    Slice,
}

impl Shape {
    pub const ALL: &[Shape] = &[
        Shape::Straight,
        Shape::Draw,
        Shape::Fade,
        Shape::Hook,
        Shape::Slice,
    ];

    pub fn from_id(s: &str) -> Result<Shape> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShotError::unknown("shape", s))
    }

    pub fn id(&self) -> &'static str {
        match self {
            Shape::Straight => "straight",
            Shape::Draw => "draw",
            Shape::Fade => "fade",
            Shape::Hook => "hook",
            Shape::Slice => "slice",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Straight => "Straight",
            Shape::Draw => "Draw",
            Shape::Fade => "Fade",
            Shape::Hook => "Hook",
            Shape::Slice => "Slice",
        }
    }

    /// Multiplier applied to the club's base carry.
    pub fn carry_factor(&self) -> f64 {
        match self {
            Shape::Straight => 1.0,
            Shape::Draw => 1.03,
            Shape::Fade => 0.97,
            Shape::Hook => 1.06,
            Shape::Slice => 0.92,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Shape {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s)
    }
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_id(&s).map_err(de::Error::custom)
    }
}

/// Launch height category. Higher flights spend longer in the air and are
/// pushed around more by the wind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Trajectory {
    Stinger,
    Low,
    #[default]
    Mid,
    High,
}

impl Trajectory {
    pub const ALL: &[Trajectory] = &[
        Trajectory::Stinger,
        Trajectory::Low,
        Trajectory::Mid,
        Trajectory::High,
    ];

    pub fn from_id(s: &str) -> Result<Trajectory> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShotError::unknown("trajectory", s))
    }

    pub fn id(&self) -> &'static str {
        match self {
            Trajectory::Stinger => "stinger",
            Trajectory::Low => "low",
            Trajectory::Mid => "mid",
            Trajectory::High => "high",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Trajectory::Stinger => "Stinger",
            Trajectory::Low => "Low",
            Trajectory::Mid => "Mid",
            Trajectory::High => "High",
        }
    }

    /// Scale on the wind's effect on carry and drift. 1.0 = stock flight.
    pub fn wind_sensitivity(&self) -> f64 {
        match self {
            Trajectory::Stinger => 0.5,
            Trajectory::Low => 0.75,
            Trajectory::Mid => 1.0,
            Trajectory::High => 1.3,
        }
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Trajectory {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s)
    }
}

impl<'de> Deserialize<'de> for Trajectory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_id(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn club_codes_round_trip_through_lookup() {
        for club in Club::ALL {
            assert_eq!(Club::from_code(club.code()), Ok(*club));
            assert_eq!(Club::from_code(&club.code().to_lowercase()), Ok(*club));
            let json = serde_json::to_string(club).unwrap();
            assert_eq!(json, format!("\"{}\"", club.code()));
        }
    }

    #[test]
    fn unknown_identifiers_fail() {
        assert_eq!(
            Club::from_code("PT"),
            Err(ShotError::UnknownProfile {
                kind: "club",
                id: "PT".into()
            })
        );
        assert!(matches!(
            "knuckleball".parse::<Shape>(),
            Err(ShotError::UnknownProfile { kind: "shape", .. })
        ));
        assert!(matches!(
            Trajectory::from_id("moonshot"),
            Err(ShotError::UnknownProfile {
                kind: "trajectory",
                ..
            })
        ));
    }

    #[test]
    fn deserializes_any_case_and_reports_catalog_misses() {
        assert_eq!(serde_json::from_str::<Club>("\"dr\"").unwrap(), Club::Driver);
        assert_eq!(serde_json::from_str::<Club>("\"7i\"").unwrap(), Club::Iron7);
        assert_eq!(serde_json::from_str::<Shape>("\"Draw\"").unwrap(), Shape::Draw);
        assert_eq!(
            serde_json::from_str::<Trajectory>("\"HIGH\"").unwrap(),
            Trajectory::High
        );

        let err = serde_json::from_str::<Club>("\"PT\"").unwrap_err();
        assert!(err.to_string().starts_with("unknown club 'PT'"), "{err}");
        let err = serde_json::from_str::<Shape>("\"knuckleball\"").unwrap_err();
        assert!(err.to_string().starts_with("unknown shape 'knuckleball'"), "{err}");
    }

    #[test]
    fn catalog_values_are_in_range() {
        assert!(Club::ALL.iter().all(|c| c.base_carry_yards() > 0.0));
        assert!(Shape::ALL.iter().all(|s| s.carry_factor() > 0.0));
        assert!(Trajectory::ALL.iter().all(|t| t.wind_sensitivity() >= 0.0));
        assert_eq!(Club::Driver.base_carry_yards(), 265.0);
        assert_eq!(Shape::Straight.carry_factor(), 1.0);
        assert_eq!(Trajectory::Mid.wind_sensitivity(), 1.0);
    }

    #[test]
    fn trajectory_sensitivity_grows_with_height() {
        let s: Vec<f64> = Trajectory::ALL.iter().map(|t| t.wind_sensitivity()).collect();
        assert!(s.windows(2).all(|w| w[0] < w[1]));
    }
}
