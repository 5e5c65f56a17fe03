use crate::{
    CategoryError, ExerciseError, ImpactError, MuscleError, NameError, RepsError, SetsError,
};

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for WriteError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => WriteError::Storage(storage),
            ReadError::Other(other) => WriteError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("quota exceeded")]
    QuotaExceeded,
    #[error("corrupt data: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

/// Rejected user input. A rejected input never results in a state change.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
    #[error(transparent)]
    Muscle(#[from] MuscleError),
    #[error(transparent)]
    Impact(#[from] ImpactError),
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Sets(#[from] SetsError),
    #[error(transparent)]
    Reps(#[from] RepsError),
}
