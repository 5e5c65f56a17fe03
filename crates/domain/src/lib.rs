#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod analytics;
mod catalog;
mod error;
mod exercise;
mod muscle;
mod name;
mod plan;
mod plan_store;
mod report;
mod store;

pub use analytics::{
    Analytics, Engagement, Level, RankedMuscle, Summary, max_total, muscle_engagement, ranking,
};
pub use catalog::ExerciseCatalog;
pub use error::{ReadError, StorageError, ValidationError, WriteError};
pub use exercise::{
    Category, CategoryError, Exercise, ExerciseError, ExerciseFilter, ExerciseID,
    validate_muscles,
};
pub use muscle::{Impact, ImpactError, Muscle, MuscleError, MuscleTarget, Property};
pub use name::{Name, NameError};
pub use plan::{
    NewWorkout, NewWorkoutExercise, Plan, PlanID, Reps, RepsError, Sets, SetsError,
    Workout, WorkoutExercise, WorkoutExerciseUpdate, WorkoutID,
};
pub use plan_store::PlanStore;
pub use report::PlanReport;
pub use store::{Clock, Mutation, State, StateRepository, Store, SubscriptionID, SystemClock};
