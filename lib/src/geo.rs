//! Geodesy: great-circle distance and target bearing between two points.

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShotError};
use crate::units::Distance;

/// Mean earth radius (spherical approximation).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a validated point. Fails with `InvalidCoordinate` when either
    /// component is non-finite or out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    /// Fields are public for deserialization, so every operation re-checks.
    pub fn validate(&self) -> Result<()> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(ShotError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lon"`.
impl std::str::FromStr for GeoPoint {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| ShotError::InvalidInput(format!("expected 'lat,lon', got {s:?}")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| ShotError::InvalidInput(format!("invalid number {v:?} in {s:?}")))
        };
        GeoPoint::new(parse(lat)?, parse(lon)?)
    }
}

/// Haversine great-circle distance in meters.
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> Result<f64> {
    a.validate()?;
    b.validate()?;

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Clamp guards asin against rounding just above 1.0 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();

    Ok(EARTH_RADIUS_M * c)
}

/// Great-circle distance in whole yards (rounded to nearest).
pub fn distance_yards(a: &GeoPoint, b: &GeoPoint) -> Result<u32> {
    let meters = distance_meters(a, b)?;
    Ok(Distance::Meters(meters).as_yards().round() as u32)
}

/// Planar bearing from `from` to `to`, in radians: `atan2(Δlon, Δlat)`.
///
/// Flat-earth approximation without cos(latitude) scaling of the longitude
/// delta, only meaningful across a single hole. Identical points return 0.0
/// (due north). Use [`initial_bearing`] for anything longer.
pub fn target_bearing(from: &GeoPoint, to: &GeoPoint) -> Result<f64> {
    from.validate()?;
    to.validate()?;

    let delta_lon = to.longitude - from.longitude;
    let delta_lat = to.latitude - from.latitude;
    if delta_lon == 0.0 && delta_lat == 0.0 {
        return Ok(0.0);
    }
    Ok(delta_lon.atan2(delta_lat))
}

/// Great-circle initial bearing from `from` to `to`, radians in `[0, 2π)`.
pub fn initial_bearing(from: &GeoPoint, to: &GeoPoint) -> Result<f64> {
    from.validate()?;
    to.validate()?;
    if from == to {
        return Ok(0.0);
    }

    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    Ok(x.atan2(y).rem_euclid(TAU))
}
