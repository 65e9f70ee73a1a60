//! REST API request/response types shared between the app and its clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ShotError;
use crate::plan::ShotPlan;
use crate::{Club, Shape, Trajectory};

/// GET /api/catalog response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub clubs: Vec<ClubEntry>,
    pub shapes: Vec<ShapeEntry>,
    pub trajectories: Vec<TrajectoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubEntry {
    pub id: Club,
    pub name: String,
    pub base_carry_yards: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub id: Shape,
    pub name: String,
    pub carry_factor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryEntry {
    pub id: Trajectory,
    pub name: String,
    pub wind_sensitivity: f64,
}

impl CatalogResponse {
    /// Snapshot of the fixed equipment catalogs, in display order.
    pub fn current() -> Self {
        Self {
            clubs: Club::ALL
                .iter()
                .map(|c| ClubEntry {
                    id: *c,
                    name: c.name().into(),
                    base_carry_yards: c.base_carry_yards(),
                })
                .collect(),
            shapes: Shape::ALL
                .iter()
                .map(|s| ShapeEntry {
                    id: *s,
                    name: s.name().into(),
                    carry_factor: s.carry_factor(),
                })
                .collect(),
            trajectories: Trajectory::ALL
                .iter()
                .map(|t| TrajectoryEntry {
                    id: *t,
                    name: t.name().into(),
                    wind_sensitivity: t.wind_sensitivity(),
                })
                .collect(),
        }
    }
}

/// Live session state: the committed plan plus a revision counter that bumps
/// on every successful input change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
    pub plan: ShotPlan,
}

/// Body of every 4xx response from the plan endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: String,
    pub error: String,
}

impl From<&ShotError> for ErrorResponse {
    fn from(err: &ShotError) -> Self {
        Self {
            kind: err.kind().into(),
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_profile() {
        let catalog = CatalogResponse::current();
        assert_eq!(catalog.clubs.len(), Club::ALL.len());
        assert_eq!(catalog.shapes.len(), Shape::ALL.len());
        assert_eq!(catalog.trajectories.len(), Trajectory::ALL.len());
        assert_eq!(catalog.clubs[0].id, Club::Driver);

        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["clubs"][0]["id"], "DR");
        assert_eq!(json["trajectories"][0]["id"], "stinger");
    }

    #[test]
    fn error_body_carries_kind() {
        let body = ErrorResponse::from(&ShotError::InvalidInput("wind".into()));
        assert_eq!(body.kind, "invalid_input");
        assert_eq!(body.error, "invalid input: wind");
    }
}
