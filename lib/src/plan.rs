//! Shot planning pipeline: geodesy → wind → shot model, from one snapshot.

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::equipment::{Club, Shape, Trajectory};
use crate::error::{Result, ShotError};
use crate::geo::{self, GeoPoint};
use crate::model::ShotModel;
use crate::wind::{self, WindVector};

/// Everything a shot depends on. Always evaluated as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotInputs {
    pub player: GeoPoint,
    pub target: GeoPoint,
    #[serde(default)]
    pub wind: WindVector,
    pub club: Club,
    #[serde(default)]
    pub shape: Shape,
    #[serde(default)]
    pub trajectory: Trajectory,
}

impl ShotInputs {
    /// Stock setup for a hole: on the tee, aiming at the green, driver, no wind.
    pub fn for_hole(course: &Course, number: u8) -> Result<Self> {
        let hole = course.hole(number)?;
        Ok(Self {
            player: hole.tee,
            target: hole.green,
            wind: WindVector::calm(),
            club: Club::Driver,
            shape: Shape::default(),
            trajectory: Trajectory::default(),
        })
    }

    /// Produce the next snapshot with `change` applied. `self` is untouched.
    pub fn with_change(&self, change: &InputChange, course: Option<&Course>) -> Result<Self> {
        let mut next = *self;
        match change {
            InputChange::SetPlayer { player } => next.player = *player,
            InputChange::SetTarget { target } => next.target = *target,
            InputChange::SetWind { wind } => next.wind = *wind,
            InputChange::SetClub { club } => next.club = *club,
            InputChange::SetShape { shape } => next.shape = *shape,
            InputChange::SetTrajectory { trajectory } => next.trajectory = *trajectory,
            InputChange::SelectHole { number } => {
                let course = course.ok_or_else(|| {
                    ShotError::InvalidInput("no course loaded, cannot select a hole".into())
                })?;
                let hole = course.hole(*number)?;
                next.player = hole.tee;
                next.target = hole.green;
            }
            InputChange::Replace { inputs } => next = *inputs,
        }
        Ok(next)
    }
}

/// A single edit to the shot inputs, as sent by an input surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputChange {
    SetPlayer { player: GeoPoint },
    SetTarget { target: GeoPoint },
    SetWind { wind: WindVector },
    SetClub { club: Club },
    SetShape { shape: Shape },
    SetTrajectory { trajectory: Trajectory },
    /// Move the player to the hole's tee and the target to its green.
    SelectHole { number: u8 },
    Replace { inputs: ShotInputs },
}

/// Derived result for one snapshot. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotResult {
    pub distance_to_target_yards: u32,
    pub carry_yards: i32,
    pub lateral_drift_yards: i32,
}

/// A `ShotResult` together with the inputs and intermediate values it was
/// computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotPlan {
    pub inputs: ShotInputs,
    pub result: ShotResult,
    pub target_bearing_rad: f64,
    pub headwind_mph: f64,
    pub crosswind_mph: f64,
}

impl ShotPlan {
    /// Yards left to the target after the predicted carry (negative = long).
    pub fn remaining_yards(&self) -> i64 {
        i64::from(self.result.distance_to_target_yards) - i64::from(self.result.carry_yards)
    }
}

/// Run the full pipeline on one snapshot.
pub fn plan(inputs: &ShotInputs, model: &ShotModel) -> Result<ShotPlan> {
    let distance = geo::distance_yards(&inputs.player, &inputs.target)?;
    let bearing = geo::target_bearing(&inputs.player, &inputs.target)?;
    let components = wind::resolve(&inputs.wind, bearing)?;
    let outcome = model.compute(inputs.club, inputs.shape, inputs.trajectory, components)?;

    tracing::debug!(
        distance,
        bearing,
        headwind = components.headwind,
        crosswind = components.crosswind,
        carry = outcome.carry_yards,
        drift = outcome.lateral_drift_yards,
        "shot planned"
    );

    Ok(ShotPlan {
        inputs: *inputs,
        result: ShotResult {
            distance_to_target_yards: distance,
            carry_yards: outcome.carry_yards,
            lateral_drift_yards: outcome.lateral_drift_yards,
        },
        target_bearing_rad: bearing,
        headwind_mph: components.headwind,
        crosswind_mph: components.crosswind,
    })
}
