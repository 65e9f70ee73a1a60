//! Course data: read-only hole layout with tee and green positions.
//!
//! Courses are plain TOML files:
//!
//! ```toml
//! name = "Example Links"
//!
//! [[holes]]
//! number = 1
//! par = 4
//! handicap = 7
//! length_yards = 468
//! tee = { latitude = 36.3188, longitude = -78.3843 }
//! green = { latitude = 36.3226, longitude = -78.3837 }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShotError};
use crate::geo::GeoPoint;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    pub handicap: u8,
    /// Scorecard length. Not derived from the tee/green points.
    pub length_yards: u32,
    pub tee: GeoPoint,
    pub green: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Course {
    /// Parse and validate a course file.
    pub fn from_toml_str(s: &str) -> Result<Course> {
        let course: Course =
            toml::from_str(s).map_err(|e| ShotError::InvalidCourse(e.to_string()))?;
        course.validate()?;
        Ok(course)
    }

    /// Every hole needs valid coordinates and a unique number.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for hole in &self.holes {
            if !seen.insert(hole.number) {
                return Err(ShotError::InvalidCourse(format!(
                    "hole {} listed more than once",
                    hole.number
                )));
            }
            for (label, point) in [("tee", &hole.tee), ("green", &hole.green)] {
                point.validate().map_err(|e| {
                    ShotError::InvalidCourse(format!("hole {} {label}: {e}", hole.number))
                })?;
            }
        }
        Ok(())
    }

    pub fn hole(&self, number: u8) -> Result<&Hole> {
        self.holes
            .iter()
            .find(|h| h.number == number)
            .ok_or_else(|| ShotError::InvalidInput(format!("no hole {number} on this course")))
    }

    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_HOLES: &str = r#"
name = "Test Links"

[[holes]]
number = 1
par = 4
handicap = 7
length_yards = 468
tee = { latitude = 36.3188, longitude = -78.3843 }
green = { latitude = 36.3226, longitude = -78.3837 }

[[holes]]
number = 2
par = 3
handicap = 15
length_yards = 162
tee = { latitude = 36.3231, longitude = -78.3829 }
green = { latitude = 36.3244, longitude = -78.3816 }
"#;

    #[test]
    fn parses_course_file() {
        let course = Course::from_toml_str(TWO_HOLES).unwrap();
        assert_eq!(course.name, "Test Links");
        assert_eq!(course.holes.len(), 2);
        assert_eq!(course.total_par(), 7);
        let hole = course.hole(2).unwrap();
        assert_eq!(hole.par, 3);
        assert_eq!(hole.tee.latitude, 36.3231);
        assert!(course.hole(9).is_err());
    }

    #[test]
    fn rejects_duplicate_holes() {
        let doubled = TWO_HOLES.replace("number = 2", "number = 1");
        assert!(matches!(
            Course::from_toml_str(&doubled),
            Err(ShotError::InvalidCourse(_))
        ));
    }

    #[test]
    fn rejects_bad_coordinates() {
        let bad = TWO_HOLES.replace("latitude = 36.3244", "latitude = 136.3244");
        let err = Course::from_toml_str(&bad).unwrap_err();
        assert!(err.to_string().contains("hole 2 green"), "{err}");
    }

    #[test]
    fn malformed_toml_is_a_course_error() {
        assert!(matches!(
            Course::from_toml_str("holes = 3"),
            Err(ShotError::InvalidCourse(_))
        ));
    }
}
