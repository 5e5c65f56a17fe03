use std::slice::Iter;

use chrono::{DateTime, Utc};

use crate::{
    Name, NewWorkout, NewWorkoutExercise, Plan, PlanID, Workout, WorkoutExercise,
    WorkoutExerciseUpdate, WorkoutID,
};

/// Ordered collection of plans.
///
/// Every mutation returns whether the state changed. Unknown plan or workout identifiers and
/// out-of-range entry positions never cause an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlanStore {
    plans: Vec<Plan>,
}

impl PlanStore {
    #[must_use]
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    #[must_use]
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn iter(&self) -> Iter<'_, Plan> {
        self.plans.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    #[must_use]
    pub fn plan(&self, id: PlanID) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == id)
    }

    fn plan_mut(&mut self, id: PlanID) -> Option<&mut Plan> {
        self.plans.iter_mut().find(|p| p.id == id)
    }

    pub fn create_plan(&mut self, name: Name, description: String, now: DateTime<Utc>) -> PlanID {
        let plan = Plan::new(name, description, now);
        let id = plan.id;
        self.plans.push(plan);
        id
    }

    pub fn update_plan(
        &mut self,
        id: PlanID,
        name: Name,
        description: String,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(plan) = self.plan_mut(id) else {
            return false;
        };
        plan.name = name;
        plan.description = description;
        plan.touch(now);
        true
    }

    pub fn delete_plan(&mut self, id: PlanID) -> bool {
        let len = self.plans.len();
        self.plans.retain(|p| p.id != id);
        self.plans.len() != len
    }

    pub fn add_workout_to_plan(
        &mut self,
        plan_id: PlanID,
        workout: NewWorkout,
        now: DateTime<Utc>,
    ) -> Option<WorkoutID> {
        let plan = self.plan_mut(plan_id)?;
        let id = WorkoutID::random();
        plan.workouts.push(Workout {
            id,
            name: workout.name,
            exercises: workout.exercises,
            created_at: now,
        });
        plan.touch(now);
        Some(id)
    }

    pub fn update_workout(
        &mut self,
        plan_id: PlanID,
        workout_id: WorkoutID,
        name: Name,
        exercises: Vec<WorkoutExercise>,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(plan) = self.plan_mut(plan_id) else {
            return false;
        };
        let Some(workout) = plan.workout_mut(workout_id) else {
            return false;
        };
        workout.name = name;
        workout.exercises = exercises;
        plan.touch(now);
        true
    }

    /// Removes a workout. The plan's modification time is refreshed whenever the plan exists,
    /// even if it contains no workout with the given identifier.
    pub fn delete_workout_from_plan(
        &mut self,
        plan_id: PlanID,
        workout_id: WorkoutID,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(plan) = self.plan_mut(plan_id) else {
            return false;
        };
        plan.workouts.retain(|w| w.id != workout_id);
        plan.touch(now);
        true
    }

    pub fn add_exercise_to_workout(
        &mut self,
        plan_id: PlanID,
        workout_id: WorkoutID,
        exercise: NewWorkoutExercise,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(plan) = self.plan_mut(plan_id) else {
            return false;
        };
        let Some(workout) = plan.workout_mut(workout_id) else {
            return false;
        };
        workout.exercises.push(exercise.into());
        plan.touch(now);
        true
    }

    /// Removes the entry at `index`. An out-of-range index leaves the entries unchanged but still
    /// refreshes the plan's modification time.
    pub fn remove_exercise_from_workout(
        &mut self,
        plan_id: PlanID,
        workout_id: WorkoutID,
        index: usize,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(plan) = self.plan_mut(plan_id) else {
            return false;
        };
        let Some(workout) = plan.workout_mut(workout_id) else {
            return false;
        };
        if index < workout.exercises.len() {
            workout.exercises.remove(index);
        }
        plan.touch(now);
        true
    }

    pub fn update_exercise_in_workout(
        &mut self,
        plan_id: PlanID,
        workout_id: WorkoutID,
        index: usize,
        update: WorkoutExerciseUpdate,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(plan) = self.plan_mut(plan_id) else {
            return false;
        };
        let Some(workout) = plan.workout_mut(workout_id) else {
            return false;
        };
        let Some(entry) = workout.exercises.get_mut(index) else {
            return false;
        };
        *entry = entry.merge(update);
        plan.touch(now);
        true
    }
}

impl From<Vec<Plan>> for PlanStore {
    fn from(value: Vec<Plan>) -> Self {
        Self::new(value)
    }
}
