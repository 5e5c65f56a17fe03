//! Serialized form of the application state
//!
//! Exercises are stored by identifier, plans in their order. Timestamps are milliseconds since
//! the Unix epoch.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use liftplan_domain as domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub exercises: Exercises,
    pub plans: Plans,
}

impl From<&domain::State> for State {
    fn from(value: &domain::State) -> Self {
        Self {
            exercises: Exercises {
                exercises: value
                    .catalog
                    .iter()
                    .map(|e| (e.id.to_string(), Exercise::from(e)))
                    .collect(),
            },
            plans: Plans {
                plans: value.plans.iter().map(Plan::from).collect(),
            },
        }
    }
}

impl TryFrom<State> for domain::State {
    type Error = BlobError;

    fn try_from(value: State) -> Result<Self, Self::Error> {
        let mut catalog = domain::ExerciseCatalog::empty();
        for (key, exercise) in value.exercises.exercises {
            if key != exercise.id {
                return Err(BlobError::KeyMismatch {
                    key,
                    id: exercise.id,
                });
            }
            catalog.add(domain::Exercise::try_from(exercise)?);
        }
        Ok(Self {
            catalog,
            plans: value
                .plans
                .plans
                .into_iter()
                .map(domain::Plan::try_from)
                .collect::<Result<Vec<_>, _>>()?
                .into(),
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BlobError {
    #[error("exercise {id} stored under key {key}")]
    KeyMismatch { key: String, id: String },
    #[error(transparent)]
    Invalid(#[from] domain::ValidationError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercises {
    pub exercises: BTreeMap<String, Exercise>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: String,
    pub muscles: Vec<MuscleTarget>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            category: value.category.key().to_string(),
            muscles: value.muscles.iter().map(MuscleTarget::from).collect(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = domain::ValidationError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            category: domain::Category::try_from(value.category.as_str())?,
            muscles: value
                .muscles
                .into_iter()
                .map(domain::MuscleTarget::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MuscleTarget {
    pub muscle: String,
    pub weight: u8,
}

impl From<&domain::MuscleTarget> for MuscleTarget {
    fn from(value: &domain::MuscleTarget) -> Self {
        Self {
            muscle: value.muscle.key().to_string(),
            weight: *value.impact,
        }
    }
}

impl TryFrom<MuscleTarget> for domain::MuscleTarget {
    type Error = domain::ValidationError;

    fn try_from(value: MuscleTarget) -> Result<Self, Self::Error> {
        Ok(Self {
            muscle: domain::Muscle::try_from(value.muscle.as_str())?,
            impact: domain::Impact::new(value.weight)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Plans {
    pub plans: Vec<Plan>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub workouts: Vec<Workout>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl From<&domain::Plan> for Plan {
    fn from(value: &domain::Plan) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            description: value.description.clone(),
            workouts: value.workouts.iter().map(Workout::from).collect(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl TryFrom<Plan> for domain::Plan {
    type Error = domain::ValidationError;

    fn try_from(value: Plan) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            description: value.description,
            workouts: value
                .workouts
                .into_iter()
                .map(domain::Workout::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub exercises: Vec<WorkoutExercise>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            exercises: value.exercises.iter().map(WorkoutExercise::from).collect(),
            created_at: value.created_at,
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = domain::ValidationError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            created_at: value.created_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub exercise_id: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub notes: String,
}

impl From<&domain::WorkoutExercise> for WorkoutExercise {
    fn from(value: &domain::WorkoutExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.to_string(),
            sets: *value.sets,
            reps: *value.reps,
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<WorkoutExercise> for domain::WorkoutExercise {
    type Error = domain::ValidationError;

    fn try_from(value: WorkoutExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            sets: domain::Sets::new(value.sets)?,
            reps: domain::Reps::new(value.reps)?,
            notes: value.notes,
        })
    }
}
