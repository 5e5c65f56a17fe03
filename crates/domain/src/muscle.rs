use std::slice::Iter;

use derive_more::Deref;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Muscle {
    // Upper body
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    // Core
    Core,
    Obliques,
    // Lower body
    Quads,
    Hamstrings,
    Glutes,
    Calves,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 12] = [
            Muscle::Chest,
            Muscle::Back,
            Muscle::Shoulders,
            Muscle::Biceps,
            Muscle::Triceps,
            Muscle::Forearms,
            Muscle::Core,
            Muscle::Obliques,
            Muscle::Quads,
            Muscle::Hamstrings,
            Muscle::Glutes,
            Muscle::Calves,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Chest => "Chest",
            Muscle::Back => "Back",
            Muscle::Shoulders => "Shoulders",
            Muscle::Biceps => "Biceps",
            Muscle::Triceps => "Triceps",
            Muscle::Forearms => "Forearms",
            Muscle::Core => "Core",
            Muscle::Obliques => "Obliques",
            Muscle::Quads => "Quads",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Glutes => "Glutes",
            Muscle::Calves => "Calves",
        }
    }
}

impl Muscle {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Muscle::Chest => "chest",
            Muscle::Back => "back",
            Muscle::Shoulders => "shoulders",
            Muscle::Biceps => "biceps",
            Muscle::Triceps => "triceps",
            Muscle::Forearms => "forearms",
            Muscle::Core => "core",
            Muscle::Obliques => "obliques",
            Muscle::Quads => "quads",
            Muscle::Hamstrings => "hamstrings",
            Muscle::Glutes => "glutes",
            Muscle::Calves => "calves",
        }
    }
}

impl TryFrom<&str> for Muscle {
    type Error = MuscleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Muscle::iter()
            .find(|m| m.key() == value)
            .copied()
            .ok_or_else(|| MuscleError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MuscleError {
    #[error("Invalid muscle: {0}")]
    Invalid(String),
}

#[derive(Deref, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Impact(u8);

impl Impact {
    pub const LOW: Impact = Impact(1);
    pub const MEDIUM: Impact = Impact(2);
    pub const HIGH: Impact = Impact(3);

    pub fn new(value: u8) -> Result<Self, ImpactError> {
        if !(1..=3).contains(&value) {
            return Err(ImpactError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "Low",
            2 => "Medium",
            _ => "High",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImpactError {
    #[error("Impact must be between 1 and 3 ({0})")]
    OutOfRange(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuscleTarget {
    pub muscle: Muscle,
    pub impact: Impact,
}

impl MuscleTarget {
    #[must_use]
    pub const fn new(muscle: Muscle, impact: Impact) -> Self {
        Self { muscle, impact }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_muscle_iter() {
        assert_eq!(Muscle::iter().count(), 12);
        assert_eq!(Muscle::iter().collect::<HashSet<_>>().len(), 12);
    }

    #[test]
    fn test_muscle_iter_is_sorted() {
        assert!(Muscle::iter().is_sorted());
    }

    #[test]
    fn test_muscle_name() {
        let mut names = HashSet::new();

        for muscle in Muscle::iter() {
            let name = muscle.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_muscle_try_from_key() {
        for muscle in Muscle::iter() {
            assert_eq!(Muscle::try_from(muscle.key()), Ok(*muscle));
        }

        assert_eq!(
            Muscle::try_from("neck"),
            Err(MuscleError::Invalid("neck".to_string()))
        );
        assert_eq!(
            Muscle::try_from("Chest"),
            Err(MuscleError::Invalid("Chest".to_string()))
        );
    }

    #[rstest]
    #[case(0, Err(ImpactError::OutOfRange(0)))]
    #[case(1, Ok(Impact::LOW))]
    #[case(2, Ok(Impact::MEDIUM))]
    #[case(3, Ok(Impact::HIGH))]
    #[case(4, Err(ImpactError::OutOfRange(4)))]
    fn test_impact_new(#[case] value: u8, #[case] expected: Result<Impact, ImpactError>) {
        assert_eq!(Impact::new(value), expected);
    }

    #[rstest]
    #[case(Impact::LOW, "Low")]
    #[case(Impact::MEDIUM, "Medium")]
    #[case(Impact::HIGH, "High")]
    fn test_impact_name(#[case] impact: Impact, #[case] expected: &str) {
        assert_eq!(impact.name(), expected);
    }
}
