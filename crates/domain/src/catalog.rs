use std::collections::BTreeMap;

use log::debug;

use crate::{Category, Exercise, ExerciseID, Impact, Muscle, MuscleTarget, Name};

/// Exercises keyed by their identifier.
///
/// Mutations never fail: updating or removing an unknown identifier leaves the catalog untouched,
/// and adding an exercise with an existing identifier replaces the previous entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseCatalog {
    exercises: BTreeMap<ExerciseID, Exercise>,
}

impl ExerciseCatalog {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            exercises: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, exercise: Exercise) {
        if let Some(previous) = self.exercises.insert(exercise.id.clone(), exercise) {
            debug!("replaced exercise {}", previous.id);
        }
    }

    pub fn update(&mut self, exercise: Exercise) -> bool {
        match self.exercises.get_mut(&exercise.id) {
            Some(entry) => {
                *entry = exercise;
                true
            }
            None => false,
        }
    }

    pub fn update_muscles(&mut self, id: &ExerciseID, muscles: Vec<MuscleTarget>) -> bool {
        match self.exercises.get_mut(id) {
            Some(entry) => {
                entry.muscles = muscles;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &ExerciseID) -> bool {
        self.exercises.remove(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.exercises.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ExerciseID) -> bool {
        self.exercises.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.values()
    }

    #[must_use]
    pub fn sorted(&self) -> Vec<&Exercise> {
        let mut exercises = self.exercises.values().collect::<Vec<_>>();
        exercises.sort_by(|a, b| a.name.cmp(&b.name));
        exercises
    }
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        DEFAULT_EXERCISES
            .iter()
            .filter_map(|(name, category, muscles)| {
                Exercise::new(Name::new(name).ok()?, *category, muscles.to_vec()).ok()
            })
            .collect()
    }
}

impl FromIterator<Exercise> for ExerciseCatalog {
    fn from_iter<T: IntoIterator<Item = Exercise>>(iter: T) -> Self {
        Self {
            exercises: iter.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }
}

const fn t(muscle: Muscle, impact: Impact) -> MuscleTarget {
    MuscleTarget::new(muscle, impact)
}

const LOW: Impact = Impact::LOW;
const MEDIUM: Impact = Impact::MEDIUM;
const HIGH: Impact = Impact::HIGH;

static DEFAULT_EXERCISES: &[(&str, Category, &[MuscleTarget])] = &[
    // Chest
    (
        "Bench Press",
        Category::Compound,
        &[
            t(Muscle::Chest, HIGH),
            t(Muscle::Triceps, MEDIUM),
            t(Muscle::Shoulders, LOW),
        ],
    ),
    (
        "Incline Bench Press",
        Category::Compound,
        &[
            t(Muscle::Chest, HIGH),
            t(Muscle::Shoulders, MEDIUM),
            t(Muscle::Triceps, LOW),
        ],
    ),
    (
        "Chest Fly",
        Category::Isolation,
        &[t(Muscle::Chest, HIGH), t(Muscle::Shoulders, LOW)],
    ),
    (
        "Push-ups",
        Category::Compound,
        &[
            t(Muscle::Chest, MEDIUM),
            t(Muscle::Triceps, MEDIUM),
            t(Muscle::Shoulders, LOW),
            t(Muscle::Core, LOW),
        ],
    ),
    // Back
    (
        "Deadlift",
        Category::Compound,
        &[
            t(Muscle::Back, HIGH),
            t(Muscle::Hamstrings, MEDIUM),
            t(Muscle::Glutes, MEDIUM),
            t(Muscle::Core, LOW),
        ],
    ),
    (
        "Pull-ups",
        Category::Compound,
        &[
            t(Muscle::Back, HIGH),
            t(Muscle::Biceps, MEDIUM),
            t(Muscle::Forearms, LOW),
        ],
    ),
    (
        "Bent-Over Row",
        Category::Compound,
        &[
            t(Muscle::Back, HIGH),
            t(Muscle::Biceps, MEDIUM),
            t(Muscle::Core, LOW),
        ],
    ),
    (
        "Lat Pulldown",
        Category::Compound,
        &[t(Muscle::Back, HIGH), t(Muscle::Biceps, LOW)],
    ),
    // Legs
    (
        "Squat",
        Category::Compound,
        &[
            t(Muscle::Quads, HIGH),
            t(Muscle::Glutes, MEDIUM),
            t(Muscle::Core, LOW),
        ],
    ),
    (
        "Leg Press",
        Category::Compound,
        &[t(Muscle::Quads, HIGH), t(Muscle::Glutes, MEDIUM)],
    ),
    ("Leg Curl", Category::Isolation, &[t(Muscle::Hamstrings, HIGH)]),
    ("Leg Extension", Category::Isolation, &[t(Muscle::Quads, HIGH)]),
    ("Calf Raises", Category::Isolation, &[t(Muscle::Calves, HIGH)]),
    // Shoulders
    (
        "Overhead Press",
        Category::Compound,
        &[
            t(Muscle::Shoulders, HIGH),
            t(Muscle::Triceps, MEDIUM),
            t(Muscle::Core, LOW),
        ],
    ),
    ("Lateral Raise", Category::Isolation, &[t(Muscle::Shoulders, HIGH)]),
    ("Front Raise", Category::Isolation, &[t(Muscle::Shoulders, HIGH)]),
    // Arms
    (
        "Bicep Curl",
        Category::Isolation,
        &[t(Muscle::Biceps, HIGH), t(Muscle::Forearms, LOW)],
    ),
    (
        "Hammer Curl",
        Category::Isolation,
        &[t(Muscle::Biceps, HIGH), t(Muscle::Forearms, MEDIUM)],
    ),
    (
        "Tricep Dips",
        Category::Compound,
        &[
            t(Muscle::Triceps, HIGH),
            t(Muscle::Chest, LOW),
            t(Muscle::Shoulders, LOW),
        ],
    ),
    ("Tricep Extension", Category::Isolation, &[t(Muscle::Triceps, HIGH)]),
    // Core
    (
        "Plank",
        Category::Isolation,
        &[t(Muscle::Core, HIGH), t(Muscle::Shoulders, LOW)],
    ),
    ("Crunches", Category::Isolation, &[t(Muscle::Core, HIGH)]),
    (
        "Russian Twist",
        Category::Isolation,
        &[t(Muscle::Core, HIGH), t(Muscle::Obliques, MEDIUM)],
    ),
];
