use std::fmt;

use chrono::{DateTime, Utc};

use crate::{Analytics, ExerciseCatalog, Plan, Property};

/// Printable export of a plan.
///
/// The muscle engagement section is based on [`Analytics`] and therefore shows the same numbers
/// as the analytics of the plan.
pub struct PlanReport<'a> {
    plan: &'a Plan,
    catalog: &'a ExerciseCatalog,
    analytics: Analytics,
    generated_at: DateTime<Utc>,
}

impl<'a> PlanReport<'a> {
    #[must_use]
    pub fn new(plan: &'a Plan, catalog: &'a ExerciseCatalog, generated_at: DateTime<Utc>) -> Self {
        Self {
            plan,
            catalog,
            analytics: Analytics::new(plan, catalog),
            generated_at,
        }
    }

    #[must_use]
    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.plan.name)?;
        if !self.plan.description.is_empty() {
            writeln!(f, "{}", self.plan.description)?;
        }
        writeln!(f, "Created: {}", format_date(self.plan.created_at))?;
        writeln!(f, "Last Updated: {}", format_date(self.plan.updated_at))
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.analytics.summary;
        writeln!(f, "Workouts: {}", summary.workouts)?;
        writeln!(f, "Exercises: {}", summary.exercises)?;
        writeln!(f, "Muscles: {}", summary.muscles_targeted)?;
        writeln!(f, "Engagement: {}", summary.total_engagement)
    }

    fn write_engagement(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Muscle Engagement")?;
        writeln!(f, "{:<12}{:>10}{:>8}  Level", "Muscle", "Exercises", "Total")?;
        for m in &self.analytics.ranking {
            writeln!(
                f,
                "{:<12}{:>10}{:>8}  {}",
                m.muscle.name(),
                m.count,
                m.total,
                m.level.name()
            )?;
        }
        Ok(())
    }

    fn write_workouts(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workout Details")?;
        for (i, workout) in self.plan.workouts.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, workout.name)?;
            if workout.exercises.is_empty() {
                writeln!(f, "   No exercises")?;
                continue;
            }
            for (j, entry) in workout.exercises.iter().enumerate() {
                let Some(exercise) = self.catalog.get(&entry.exercise_id) else {
                    continue;
                };
                writeln!(
                    f,
                    "   {}. {} ({})",
                    j + 1,
                    exercise.name,
                    exercise.category.name()
                )?;
                writeln!(
                    f,
                    "      Targets: {}",
                    exercise
                        .muscles
                        .iter()
                        .map(|t| format!("{} ({})", t.muscle.name(), t.impact.name()))
                        .collect::<Vec<_>>()
                        .join(", ")
                )?;
                writeln!(
                    f,
                    "      Sets: {}, Reps: {}, Notes: {}",
                    entry.sets,
                    entry.reps,
                    if entry.notes.is_empty() {
                        "-"
                    } else {
                        &entry.notes
                    }
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        writeln!(f)?;
        self.write_summary(f)?;
        writeln!(f)?;
        self.write_engagement(f)?;
        writeln!(f)?;
        self.write_workouts(f)?;
        writeln!(f)?;
        writeln!(f, "Generated on {}", format_date(self.generated_at))
    }
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use crate::{
        Category, Exercise, Impact, Muscle, MuscleTarget, Name, Reps, Workout, WorkoutExercise,
    };

    use super::*;

    fn time(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn catalog() -> ExerciseCatalog {
        [Exercise::new(
            Name::new("Bench Press").unwrap(),
            Category::Compound,
            vec![
                MuscleTarget::new(Muscle::Chest, Impact::HIGH),
                MuscleTarget::new(Muscle::Triceps, Impact::MEDIUM),
                MuscleTarget::new(Muscle::Shoulders, Impact::LOW),
            ],
        )
        .unwrap()]
        .into_iter()
        .collect()
    }

    fn plan() -> Plan {
        Plan {
            id: 1.into(),
            name: Name::new("Strength").unwrap(),
            description: "Heavy pressing".to_string(),
            workouts: vec![
                Workout {
                    id: 2.into(),
                    name: Name::new("Push").unwrap(),
                    exercises: vec![
                        WorkoutExercise::new("bench-press".into()),
                        WorkoutExercise::new("deleted".into()),
                        WorkoutExercise {
                            reps: Reps::new(5).unwrap(),
                            notes: "paused".to_string(),
                            ..WorkoutExercise::new("bench-press".into())
                        },
                    ],
                    created_at: time(1_704_067_200_000),
                },
                Workout {
                    id: 3.into(),
                    name: Name::new("Rest").unwrap(),
                    exercises: vec![],
                    created_at: time(1_704_067_200_000),
                },
            ],
            created_at: time(1_704_067_200_000),
            updated_at: time(1_706_832_000_000),
        }
    }

    #[test]
    fn test_plan_report() {
        let catalog = catalog();
        let plan = plan();

        assert_eq!(
            PlanReport::new(&plan, &catalog, time(1_709_251_200_000)).to_string(),
            "Strength\n\
             Heavy pressing\n\
             Created: January 1, 2024\n\
             Last Updated: February 2, 2024\n\
             \n\
             Workouts: 2\n\
             Exercises: 3\n\
             Muscles: 3\n\
             Engagement: 12\n\
             \n\
             Muscle Engagement\n\
             Muscle       Exercises   Total  Level\n\
             Chest                2       6  Very High\n\
             Triceps              2       4  High\n\
             Shoulders            2       2  Medium\n\
             \n\
             Workout Details\n\
             1. Push\n   \
             1. Bench Press (Compound)\n      \
             Targets: Chest (High), Triceps (Medium), Shoulders (Low)\n      \
             Sets: 3, Reps: 10, Notes: -\n   \
             3. Bench Press (Compound)\n      \
             Targets: Chest (High), Triceps (Medium), Shoulders (Low)\n      \
             Sets: 3, Reps: 5, Notes: paused\n\
             2. Rest\n   \
             No exercises\n\
             \n\
             Generated on March 1, 2024\n"
        );
    }

    #[test]
    fn test_plan_report_empty_plan() {
        let catalog = catalog();
        let plan = Plan {
            description: String::new(),
            workouts: vec![],
            ..plan()
        };

        assert_eq!(
            PlanReport::new(&plan, &catalog, time(1_709_251_200_000)).to_string(),
            "Strength\n\
             Created: January 1, 2024\n\
             Last Updated: February 2, 2024\n\
             \n\
             Workouts: 0\n\
             Exercises: 0\n\
             Muscles: 0\n\
             Engagement: 0\n\
             \n\
             Muscle Engagement\n\
             Muscle       Exercises   Total  Level\n\
             \n\
             Workout Details\n\
             \n\
             Generated on March 1, 2024\n"
        );
    }

    #[test]
    fn test_plan_report_matches_analytics() {
        let catalog = catalog();
        let plan = plan();

        assert_eq!(
            *PlanReport::new(&plan, &catalog, time(0)).analytics(),
            Analytics::new(&plan, &catalog)
        );
    }
}
