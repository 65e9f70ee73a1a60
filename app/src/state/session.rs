//! Live planning session: the current shot inputs and the plan computed
//! from them.
//!
//! Inputs and plan live behind a single lock so readers never see a plan
//! that belongs to a different set of inputs. Each committed change is also
//! published on a `watch` channel; slow subscribers simply skip to the
//! latest snapshot.

use std::sync::RwLock;

use chrono::Utc;
use tokio::sync::watch;

use shotplan::{Course, InputChange, SessionSnapshot, ShotError, ShotInputs, ShotModel};

pub struct Session {
    model: ShotModel,
    course: Option<Course>,
    current: RwLock<Option<SessionSnapshot>>,
    tx: watch::Sender<Option<SessionSnapshot>>,
}

impl Session {
    /// Create an empty session. The first change must be `replace` or
    /// `select_hole`, since nothing else can be applied without a position.
    pub fn new(model: ShotModel, course: Option<Course>) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            model,
            course,
            current: RwLock::new(None),
            tx,
        }
    }

    pub fn model(&self) -> &ShotModel {
        &self.model
    }

    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    /// Clone the current committed snapshot.
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Receiver that always holds the latest committed snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionSnapshot>> {
        self.tx.subscribe()
    }

    /// Apply one change and recompute. On error nothing is committed and the
    /// previous snapshot stays current.
    pub fn apply(&self, change: &InputChange) -> Result<SessionSnapshot, ShotError> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());

        let next_inputs = match (guard.as_ref(), change) {
            (_, InputChange::Replace { inputs }) => *inputs,
            (None, InputChange::SelectHole { number }) => {
                let course = self.course.as_ref().ok_or_else(|| {
                    ShotError::InvalidInput("no course loaded, cannot select a hole".into())
                })?;
                ShotInputs::for_hole(course, *number)?
            }
            (None, _) => {
                return Err(ShotError::InvalidInput(
                    "session has no shot yet; send 'replace' or 'select_hole' first".into(),
                ));
            }
            (Some(current), change) => current
                .plan
                .inputs
                .with_change(change, self.course.as_ref())?,
        };

        let plan = shotplan::plan(&next_inputs, &self.model)?;
        let revision = guard.as_ref().map_or(1, |s| s.revision + 1);
        let snapshot = SessionSnapshot {
            revision,
            updated_at: Utc::now(),
            plan,
        };
        *guard = Some(snapshot.clone());
        self.tx.send_replace(Some(snapshot.clone()));

        tracing::debug!(
            revision,
            distance = plan.result.distance_to_target_yards,
            carry = plan.result.carry_yards,
            "session updated"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shotplan::{Club, GeoPoint, Shape, Trajectory, WindVector};

    const COURSE: &str = r#"
name = "Session Links"

[[holes]]
number = 1
par = 4
handicap = 3
length_yards = 468
tee = { latitude = 36.3188, longitude = -78.3843 }
green = { latitude = 36.3226, longitude = -78.3837 }
"#;

    fn inputs() -> ShotInputs {
        ShotInputs {
            player: GeoPoint::new(36.3188, -78.3843).unwrap(),
            target: GeoPoint::new(36.3226, -78.3843).unwrap(),
            wind: WindVector::calm(),
            club: Club::Driver,
            shape: Shape::Straight,
            trajectory: Trajectory::Mid,
        }
    }

    #[test]
    fn empty_session_only_accepts_full_inputs() {
        let session = Session::new(ShotModel::default(), None);
        assert!(session.snapshot().is_none());

        let err = session.apply(&InputChange::SetClub { club: Club::Iron7 });
        assert!(matches!(err, Err(ShotError::InvalidInput(_))));

        let snap = session
            .apply(&InputChange::Replace { inputs: inputs() })
            .unwrap();
        assert_eq!(snap.revision, 1);
        assert_eq!(snap.plan.result.carry_yards, 265);
    }

    #[test]
    fn failed_change_keeps_previous_plan() {
        let session = Session::new(ShotModel::default(), None);
        session
            .apply(&InputChange::Replace { inputs: inputs() })
            .unwrap();

        let bad_wind = WindVector {
            speed_mph: -1.0,
            bearing_deg: 0.0,
        };
        assert!(session.apply(&InputChange::SetWind { wind: bad_wind }).is_err());

        let snap = session.snapshot().unwrap();
        assert_eq!(snap.revision, 1);
        assert_eq!(snap.plan.inputs.wind, WindVector::calm());
        assert_eq!(snap.plan.result.carry_yards, 265);
    }

    #[test]
    fn plan_always_matches_its_inputs() {
        let session = Session::new(ShotModel::default(), None);
        session
            .apply(&InputChange::Replace { inputs: inputs() })
            .unwrap();
        let snap = session
            .apply(&InputChange::SetClub { club: Club::Iron7 })
            .unwrap();
        assert_eq!(snap.revision, 2);
        assert_eq!(snap.plan.inputs.club, Club::Iron7);
        assert_eq!(snap.plan.result.carry_yards, 165);
        assert_eq!(
            snap.plan,
            shotplan::plan(&snap.plan.inputs, &ShotModel::default()).unwrap()
        );
    }

    #[test]
    fn select_hole_moves_to_tee() {
        let course = Course::from_toml_str(COURSE).unwrap();
        let session = Session::new(ShotModel::default(), Some(course));
        let snap = session
            .apply(&InputChange::SelectHole { number: 1 })
            .unwrap();
        assert_eq!(snap.plan.inputs.player.latitude, 36.3188);
        assert_eq!(snap.plan.inputs.target.latitude, 36.3226);
        assert!(session.apply(&InputChange::SelectHole { number: 2 }).is_err());
    }

    #[test]
    fn subscribers_see_latest_snapshot_only() {
        let session = Session::new(ShotModel::default(), None);
        let mut rx = session.subscribe();
        assert!(rx.borrow().is_none());

        session
            .apply(&InputChange::Replace { inputs: inputs() })
            .unwrap();
        session
            .apply(&InputChange::SetShape { shape: Shape::Draw })
            .unwrap();
        session
            .apply(&InputChange::SetTrajectory {
                trajectory: Trajectory::High,
            })
            .unwrap();

        assert!(rx.has_changed().unwrap());
        let latest = rx.borrow_and_update().clone().unwrap();
        assert_eq!(latest.revision, 3);
        assert_eq!(latest.plan.inputs.shape, Shape::Draw);
        assert_eq!(latest.plan.inputs.trajectory, Trajectory::High);
        assert!(!rx.has_changed().unwrap());
    }
}
