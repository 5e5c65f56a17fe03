use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{debug, error, warn};

use crate::{
    Exercise, ExerciseCatalog, ExerciseID, MuscleTarget, Name, NewWorkout, NewWorkoutExercise,
    PlanID, PlanStore, ReadError, WorkoutExercise, WorkoutExerciseUpdate, WorkoutID, WriteError,
};

pub trait StateRepository {
    fn read_state(&self) -> Result<Option<State>, ReadError>;
    fn write_state(&self, state: &State) -> Result<(), WriteError>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Combined application state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct State {
    pub catalog: ExerciseCatalog,
    pub plans: PlanStore,
}

impl State {
    /// Applies a mutation and returns whether the state changed.
    pub fn apply(&mut self, mutation: Mutation, now: DateTime<Utc>) -> bool {
        match mutation {
            Mutation::AddExercise(exercise) => {
                self.catalog.add(exercise);
                true
            }
            Mutation::UpdateExercise(exercise) => self.catalog.update(exercise),
            Mutation::UpdateExerciseMuscles { id, muscles } => {
                self.catalog.update_muscles(&id, muscles)
            }
            Mutation::DeleteExercise(id) => self.catalog.remove(&id),
            Mutation::CreatePlan { name, description } => {
                self.plans.create_plan(name, description, now);
                true
            }
            Mutation::UpdatePlan {
                id,
                name,
                description,
            } => self.plans.update_plan(id, name, description, now),
            Mutation::DeletePlan(id) => self.plans.delete_plan(id),
            Mutation::AddWorkoutToPlan { plan_id, workout } => self
                .plans
                .add_workout_to_plan(plan_id, workout, now)
                .is_some(),
            Mutation::UpdateWorkout {
                plan_id,
                workout_id,
                name,
                exercises,
            } => self
                .plans
                .update_workout(plan_id, workout_id, name, exercises, now),
            Mutation::DeleteWorkoutFromPlan {
                plan_id,
                workout_id,
            } => self.plans.delete_workout_from_plan(plan_id, workout_id, now),
            Mutation::AddExerciseToWorkout {
                plan_id,
                workout_id,
                exercise,
            } => self
                .plans
                .add_exercise_to_workout(plan_id, workout_id, exercise, now),
            Mutation::RemoveExerciseFromWorkout {
                plan_id,
                workout_id,
                index,
            } => self
                .plans
                .remove_exercise_from_workout(plan_id, workout_id, index, now),
            Mutation::UpdateExerciseInWorkout {
                plan_id,
                workout_id,
                index,
                update,
            } => self
                .plans
                .update_exercise_in_workout(plan_id, workout_id, index, update, now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    AddExercise(Exercise),
    UpdateExercise(Exercise),
    UpdateExerciseMuscles {
        id: ExerciseID,
        muscles: Vec<MuscleTarget>,
    },
    DeleteExercise(ExerciseID),
    CreatePlan {
        name: Name,
        description: String,
    },
    UpdatePlan {
        id: PlanID,
        name: Name,
        description: String,
    },
    DeletePlan(PlanID),
    AddWorkoutToPlan {
        plan_id: PlanID,
        workout: NewWorkout,
    },
    UpdateWorkout {
        plan_id: PlanID,
        workout_id: WorkoutID,
        name: Name,
        exercises: Vec<WorkoutExercise>,
    },
    DeleteWorkoutFromPlan {
        plan_id: PlanID,
        workout_id: WorkoutID,
    },
    AddExerciseToWorkout {
        plan_id: PlanID,
        workout_id: WorkoutID,
        exercise: NewWorkoutExercise,
    },
    RemoveExerciseFromWorkout {
        plan_id: PlanID,
        workout_id: WorkoutID,
        index: usize,
    },
    UpdateExerciseInWorkout {
        plan_id: PlanID,
        workout_id: WorkoutID,
        index: usize,
        update: WorkoutExerciseUpdate,
    },
}

impl Mutation {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddExercise(_) => "add exercise",
            Mutation::UpdateExercise(_) => "update exercise",
            Mutation::UpdateExerciseMuscles { .. } => "update exercise muscles",
            Mutation::DeleteExercise(_) => "delete exercise",
            Mutation::CreatePlan { .. } => "create plan",
            Mutation::UpdatePlan { .. } => "update plan",
            Mutation::DeletePlan(_) => "delete plan",
            Mutation::AddWorkoutToPlan { .. } => "add workout to plan",
            Mutation::UpdateWorkout { .. } => "update workout",
            Mutation::DeleteWorkoutFromPlan { .. } => "delete workout from plan",
            Mutation::AddExerciseToWorkout { .. } => "add exercise to workout",
            Mutation::RemoveExerciseFromWorkout { .. } => "remove exercise from workout",
            Mutation::UpdateExerciseInWorkout { .. } => "update exercise in workout",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionID(u64);

type Subscriber = Box<dyn FnMut(&State)>;

/// Owner of the application state.
///
/// The state is only ever replaced as a whole. A snapshot obtained by [`Store::state`] stays
/// unchanged while later mutations are dispatched.
pub struct Store<C: Clock> {
    state: Rc<State>,
    clock: C,
    subscribers: Vec<(SubscriptionID, Subscriber)>,
    next_subscription: u64,
}

impl<C: Clock> Store<C> {
    pub fn new(state: State, clock: C) -> Self {
        Self {
            state: Rc::new(state),
            clock,
            subscribers: vec![],
            next_subscription: 0,
        }
    }

    /// Initializes the store with the persisted state. The default state is used if no state was
    /// persisted or the persisted state cannot be read.
    pub fn load(repository: &impl StateRepository, clock: C) -> Self {
        let state = match repository.read_state() {
            Ok(Some(state)) => state,
            Ok(None) => {
                debug!("no persisted state, using default state");
                State::default()
            }
            Err(err) => {
                warn!("failed to read state, using default state: {err}");
                State::default()
            }
        };
        Self::new(state, clock)
    }

    #[must_use]
    pub fn state(&self) -> Rc<State> {
        Rc::clone(&self.state)
    }

    pub fn dispatch(&mut self, mutation: Mutation) -> Rc<State> {
        let name = mutation.name();
        let mut state = State::clone(&self.state);

        if state.apply(mutation, self.clock.now()) {
            debug!("applied mutation: {name}");
            self.state = Rc::new(state);
            for (_, subscriber) in &mut self.subscribers {
                subscriber(&self.state);
            }
        } else {
            debug!("ignored mutation: {name}");
        }

        self.state()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&State) + 'static) -> SubscriptionID {
        let id = SubscriptionID(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionID) -> bool {
        let len = self.subscribers.len();
        self.subscribers.retain(|(i, _)| *i != id);
        self.subscribers.len() != len
    }

    /// Writes every new state to the repository. Failed writes are logged and otherwise ignored.
    pub fn persist(&mut self, repository: impl StateRepository + 'static) -> SubscriptionID {
        self.subscribe(move |state| {
            if let Err(err) = repository.write_state(state) {
                error!("failed to save state: {err}");
            }
        })
    }
}
