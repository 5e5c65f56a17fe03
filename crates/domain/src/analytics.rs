//! Muscle engagement analytics
//!
//! Engagement is the impact weight of every muscle target accumulated over all resolved exercise
//! entries of a plan. Sets and reps of an entry do not influence the result.

use std::{collections::BTreeMap, slice::Iter};

use crate::{ExerciseCatalog, Muscle, Plan, Property};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    /// Sum of impact weights.
    pub total: u32,
    /// Number of contributing muscle targets.
    pub count: u32,
}

/// Engagement of every muscle of a plan. Muscles not targeted by any exercise are included with
/// zero engagement.
#[must_use]
pub fn muscle_engagement(plan: &Plan, catalog: &ExerciseCatalog) -> BTreeMap<Muscle, Engagement> {
    let mut result: BTreeMap<Muscle, Engagement> = Muscle::iter()
        .map(|m| (*m, Engagement::default()))
        .collect();
    for workout in &plan.workouts {
        for (_, exercise) in workout.resolved(catalog) {
            for target in &exercise.muscles {
                let engagement = result.entry(target.muscle).or_default();
                engagement.total += u32::from(*target.impact);
                engagement.count += 1;
            }
        }
    }
    result
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Level {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Level {
    #[must_use]
    pub fn from_percentage(percentage: f32) -> Self {
        if percentage >= 75.0 {
            Level::VeryHigh
        } else if percentage >= 50.0 {
            Level::High
        } else if percentage >= 25.0 {
            Level::Medium
        } else {
            Level::Low
        }
    }
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVEL: [Level; 4] = [Level::Low, Level::Medium, Level::High, Level::VeryHigh];
        LEVEL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
            Level::VeryHigh => "Very High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMuscle {
    pub muscle: Muscle,
    pub total: u32,
    pub count: u32,
    /// Total relative to the highest total of the plan.
    pub percentage: f32,
    pub level: Level,
}

/// Highest total over all muscles, but at least 1.
#[must_use]
pub fn max_total(engagement: &BTreeMap<Muscle, Engagement>) -> u32 {
    engagement.values().map(|e| e.total).max().unwrap_or(0).max(1)
}

/// Engaged muscles ordered by descending total. Muscles with equal totals keep their natural
/// order.
#[must_use]
pub fn ranking(engagement: &BTreeMap<Muscle, Engagement>) -> Vec<RankedMuscle> {
    let max_total = max_total(engagement);
    let mut result = engagement
        .iter()
        .filter(|(_, e)| e.total > 0)
        .map(|(muscle, e)| {
            #[allow(clippy::cast_precision_loss)]
            let percentage = e.total as f32 / max_total as f32 * 100.0;
            RankedMuscle {
                muscle: *muscle,
                total: e.total,
                count: e.count,
                percentage,
                level: Level::from_percentage(percentage),
            }
        })
        .collect::<Vec<_>>();
    result.sort_by(|a, b| b.total.cmp(&a.total));
    result
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub workouts: usize,
    pub exercises: usize,
    pub muscles_targeted: usize,
    pub total_engagement: u32,
}

impl Summary {
    #[must_use]
    pub fn new(plan: &Plan, engagement: &BTreeMap<Muscle, Engagement>) -> Self {
        Self {
            workouts: plan.num_workouts(),
            exercises: plan.num_exercises(),
            muscles_targeted: engagement.values().filter(|e| e.total > 0).count(),
            total_engagement: engagement.values().map(|e| e.total).sum(),
        }
    }
}

/// Everything shown about the muscle engagement of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    pub engagement: BTreeMap<Muscle, Engagement>,
    pub ranking: Vec<RankedMuscle>,
    pub summary: Summary,
}

impl Analytics {
    #[must_use]
    pub fn new(plan: &Plan, catalog: &ExerciseCatalog) -> Self {
        let engagement = muscle_engagement(plan, catalog);
        let ranking = ranking(&engagement);
        let summary = Summary::new(plan, &engagement);
        Self {
            engagement,
            ranking,
            summary,
        }
    }
}
