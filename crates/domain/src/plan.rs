use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{Exercise, ExerciseCatalog, ExerciseID, Name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: PlanID,
    pub name: Name,
    pub description: String,
    pub workouts: Vec<Workout>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    #[must_use]
    pub fn new(name: Name, description: String, now: DateTime<Utc>) -> Self {
        Self {
            id: PlanID::random(),
            name,
            description,
            workouts: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn num_workouts(&self) -> usize {
        self.workouts.len()
    }

    #[must_use]
    pub fn num_exercises(&self) -> usize {
        self.workouts.iter().map(|w| w.exercises.len()).sum()
    }

    #[must_use]
    pub fn exercises(&self) -> BTreeSet<ExerciseID> {
        self.workouts
            .iter()
            .flat_map(|w| w.exercises.iter().map(|e| e.exercise_id.clone()))
            .collect()
    }

    #[must_use]
    pub fn workout(&self, id: WorkoutID) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub(crate) fn workout_mut(&mut self, id: WorkoutID) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.id == id)
    }

    /// Refreshes the modification time without ever moving it backwards.
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanID(Uuid);

impl PlanID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub exercises: Vec<WorkoutExercise>,
    pub created_at: DateTime<Utc>,
}

impl Workout {
    /// Entries paired with their catalog exercise. Entries whose exercise no longer exists are
    /// skipped.
    pub fn resolved<'a>(
        &'a self,
        catalog: &'a ExerciseCatalog,
    ) -> impl Iterator<Item = (&'a WorkoutExercise, &'a Exercise)> {
        self.exercises
            .iter()
            .filter_map(|entry| catalog.get(&entry.exercise_id).map(|e| (entry, e)))
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub name: Name,
    pub exercises: Vec<WorkoutExercise>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutExercise {
    pub exercise_id: ExerciseID,
    pub sets: Sets,
    pub reps: Reps,
    pub notes: String,
}

impl WorkoutExercise {
    #[must_use]
    pub fn new(exercise_id: ExerciseID) -> Self {
        Self {
            exercise_id,
            sets: Sets::default(),
            reps: Reps::default(),
            notes: String::new(),
        }
    }

    #[must_use]
    pub fn merge(&self, update: WorkoutExerciseUpdate) -> Self {
        Self {
            exercise_id: update
                .exercise_id
                .unwrap_or_else(|| self.exercise_id.clone()),
            sets: update.sets.unwrap_or(self.sets),
            reps: update.reps.unwrap_or(self.reps),
            notes: update.notes.unwrap_or_else(|| self.notes.clone()),
        }
    }
}

/// Entry to be appended to a workout. Missing fields take the defaults of [`WorkoutExercise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkoutExercise {
    pub exercise_id: ExerciseID,
    pub sets: Option<Sets>,
    pub reps: Option<Reps>,
    pub notes: Option<String>,
}

impl NewWorkoutExercise {
    #[must_use]
    pub fn new(exercise_id: ExerciseID) -> Self {
        Self {
            exercise_id,
            sets: None,
            reps: None,
            notes: None,
        }
    }
}

impl From<NewWorkoutExercise> for WorkoutExercise {
    fn from(value: NewWorkoutExercise) -> Self {
        Self {
            exercise_id: value.exercise_id,
            sets: value.sets.unwrap_or_default(),
            reps: value.reps.unwrap_or_default(),
            notes: value.notes.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkoutExerciseUpdate {
    pub exercise_id: Option<ExerciseID>,
    pub sets: Option<Sets>,
    pub reps: Option<Reps>,
    pub notes: Option<String>,
}

#[derive(Deref, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if value == 0 {
            return Err(SetsError::Zero);
        }
        Ok(Self(value))
    }
}

impl Default for Sets {
    fn default() -> Self {
        Self(3)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SetsError {
    #[error("Sets must be 1 or more")]
    Zero,
}

#[derive(Deref, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value == 0 {
            return Err(RepsError::Zero);
        }
        Ok(Self(value))
    }
}

impl Default for Reps {
    fn default() -> Self {
        Self(10)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RepsError {
    #[error("Reps must be 1 or more")]
    Zero,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Category, Impact, Muscle, MuscleTarget};

    use super::*;

    fn time(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn workout(id: u128, exercises: &[&str]) -> Workout {
        Workout {
            id: id.into(),
            name: Name::new("A").unwrap(),
            exercises: exercises
                .iter()
                .map(|e| WorkoutExercise::new((*e).into()))
                .collect(),
            created_at: time(0),
        }
    }

    #[test]
    fn test_plan_new() {
        let plan = Plan::new(Name::new("Strength").unwrap(), String::new(), time(1000));

        assert!(!plan.id.is_nil());
        assert_eq!(plan.workouts, vec![]);
        assert_eq!(plan.created_at, time(1000));
        assert_eq!(plan.updated_at, time(1000));
    }

    #[test]
    fn test_plan_ids_are_unique() {
        let a = Plan::new(Name::new("A").unwrap(), String::new(), time(0));
        let b = Plan::new(Name::new("A").unwrap(), String::new(), time(0));

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_plan_counts() {
        let mut plan = Plan::new(Name::new("A").unwrap(), String::new(), time(0));
        plan.workouts = vec![
            workout(1, &["squat", "bench-press"]),
            workout(2, &[]),
            workout(3, &["squat"]),
        ];

        assert_eq!(plan.num_workouts(), 3);
        assert_eq!(plan.num_exercises(), 3);
        assert_eq!(
            plan.exercises(),
            BTreeSet::from([ExerciseID::from("bench-press"), ExerciseID::from("squat")])
        );
        assert_eq!(plan.workout(2.into()).map(|w| w.id), Some(WorkoutID::from(2)));
        assert_eq!(plan.workout(4.into()), None);
    }

    #[test]
    fn test_plan_touch_is_monotonic() {
        let mut plan = Plan::new(Name::new("A").unwrap(), String::new(), time(2000));

        plan.touch(time(3000));
        assert_eq!(plan.updated_at, time(3000));

        plan.touch(time(1000));
        assert_eq!(plan.updated_at, time(3000));
        assert!(plan.updated_at >= plan.created_at);
    }

    #[test]
    fn test_workout_resolved_skips_dangling_entries() {
        let catalog: ExerciseCatalog = [Exercise::new(
            Name::new("Squat").unwrap(),
            Category::Compound,
            vec![MuscleTarget::new(Muscle::Quads, Impact::HIGH)],
        )
        .unwrap()]
        .into_iter()
        .collect();
        let workout = workout(1, &["squat", "deleted", "squat"]);

        assert_eq!(
            workout
                .resolved(&catalog)
                .map(|(entry, exercise)| (entry.exercise_id.to_string(), exercise.name.to_string()))
                .collect::<Vec<_>>(),
            vec![
                ("squat".to_string(), "Squat".to_string()),
                ("squat".to_string(), "Squat".to_string())
            ]
        );
    }

    #[test]
    fn test_workout_exercise_new() {
        assert_eq!(
            WorkoutExercise::new("squat".into()),
            WorkoutExercise {
                exercise_id: "squat".into(),
                sets: Sets(3),
                reps: Reps(10),
                notes: String::new(),
            }
        );
    }

    #[test]
    fn test_new_workout_exercise_into_workout_exercise() {
        assert_eq!(
            WorkoutExercise::from(NewWorkoutExercise {
                reps: Some(Reps(5)),
                ..NewWorkoutExercise::new("deadlift".into())
            }),
            WorkoutExercise {
                exercise_id: "deadlift".into(),
                sets: Sets(3),
                reps: Reps(5),
                notes: String::new(),
            }
        );
    }

    #[rstest]
    #[case::sets(
        WorkoutExerciseUpdate { sets: Some(Sets(5)), ..WorkoutExerciseUpdate::default() },
        WorkoutExercise { exercise_id: "squat".into(), sets: Sets(5), reps: Reps(8), notes: "slow".into() }
    )]
    #[case::notes(
        WorkoutExerciseUpdate { notes: Some(String::new()), ..WorkoutExerciseUpdate::default() },
        WorkoutExercise { exercise_id: "squat".into(), sets: Sets(4), reps: Reps(8), notes: String::new() }
    )]
    #[case::exercise_and_reps(
        WorkoutExerciseUpdate {
            exercise_id: Some("leg-press".into()),
            reps: Some(Reps(12)),
            ..WorkoutExerciseUpdate::default()
        },
        WorkoutExercise { exercise_id: "leg-press".into(), sets: Sets(4), reps: Reps(12), notes: "slow".into() }
    )]
    #[case::nothing(
        WorkoutExerciseUpdate::default(),
        WorkoutExercise { exercise_id: "squat".into(), sets: Sets(4), reps: Reps(8), notes: "slow".into() }
    )]
    fn test_workout_exercise_merge(
        #[case] update: WorkoutExerciseUpdate,
        #[case] expected: WorkoutExercise,
    ) {
        let entry = WorkoutExercise {
            exercise_id: "squat".into(),
            sets: Sets(4),
            reps: Reps(8),
            notes: "slow".into(),
        };

        assert_eq!(entry.merge(update), expected);
    }

    #[rstest]
    #[case(0, Err(SetsError::Zero))]
    #[case(1, Ok(Sets(1)))]
    #[case(12, Ok(Sets(12)))]
    fn test_sets_new(#[case] value: u32, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::new(value), expected);
    }

    #[rstest]
    #[case(0, Err(RepsError::Zero))]
    #[case(1, Ok(Reps(1)))]
    #[case(100, Ok(Reps(100)))]
    fn test_reps_new(#[case] value: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(value), expected);
    }
}
