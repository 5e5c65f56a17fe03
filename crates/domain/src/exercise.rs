use std::{collections::HashSet, slice::Iter};

use derive_more::{Deref, Display};

use crate::{Muscle, MuscleTarget, Name, Property};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category: Category,
    pub muscles: Vec<MuscleTarget>,
}

impl Exercise {
    /// Creates an exercise whose identifier is derived from its name.
    pub fn new(
        name: Name,
        category: Category,
        muscles: Vec<MuscleTarget>,
    ) -> Result<Self, ExerciseError> {
        validate_muscles(&muscles)?;
        Ok(Self {
            id: ExerciseID::derive(&name),
            name,
            category,
            muscles,
        })
    }

    /// Returns a modified copy that keeps the original identifier.
    pub fn edit(
        &self,
        name: Name,
        category: Category,
        muscles: Vec<MuscleTarget>,
    ) -> Result<Self, ExerciseError> {
        validate_muscles(&muscles)?;
        Ok(Self {
            id: self.id.clone(),
            name,
            category,
            muscles,
        })
    }

    #[must_use]
    pub fn targets(&self, muscle: Muscle) -> bool {
        self.muscles.iter().any(|m| m.muscle == muscle)
    }
}

pub fn validate_muscles(muscles: &[MuscleTarget]) -> Result<(), ExerciseError> {
    if muscles.is_empty() {
        return Err(ExerciseError::NoMuscles);
    }
    let mut seen = HashSet::new();
    for target in muscles {
        if !seen.insert(target.muscle) {
            return Err(ExerciseError::DuplicateMuscle(target.muscle));
        }
    }
    Ok(())
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExerciseError {
    #[error("Exercise must target at least one muscle")]
    NoMuscles,
    #[error("Muscle is already targeted: {}", .0.name())]
    DuplicateMuscle(Muscle),
}

#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(String);

impl AsRef<str> for ExerciseID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ExerciseID {
    #[must_use]
    pub fn derive(name: &Name) -> Self {
        Self(name.slug())
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Compound,
    Isolation,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 2] = [Category::Compound, Category::Isolation];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Compound => "Compound",
            Category::Isolation => "Isolation",
        }
    }
}

impl Category {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Category::Compound => "compound",
            Category::Isolation => "isolation",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Category::iter()
            .find(|c| c.key() == value)
            .copied()
            .ok_or_else(|| CategoryError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Invalid category: {0}")]
    Invalid(String),
}

#[derive(Default, PartialEq)]
pub struct ExerciseFilter {
    pub name: String,
    pub category: HashSet<Category>,
}

impl ExerciseFilter {
    /// Matching exercises ordered by name.
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        let term = self.name.trim().to_lowercase();
        let mut result = exercises
            .filter(|e| {
                e.name.as_ref().to_lowercase().contains(&term)
                    && (self.category.is_empty() || self.category.contains(&e.category))
            })
            .collect::<Vec<_>>();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        result
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.category.is_empty()
    }

    #[must_use]
    pub fn category_list(&self) -> Vec<(Category, bool)> {
        Category::iter()
            .map(|c| (*c, self.category.contains(c)))
            .collect::<Vec<_>>()
    }

    pub fn toggle_category(&mut self, category: Category) {
        if self.category.contains(&category) {
            self.category.remove(&category);
        } else {
            self.category.insert(category);
        }
    }
}
