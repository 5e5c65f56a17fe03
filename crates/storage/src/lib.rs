#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use liftplan_domain as domain;
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

pub mod blob;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod log;
pub mod memory;
mod repository;
mod settings;

pub use repository::Repository;
pub use settings::{Settings, SettingsRepository};

/// Synchronous store of JSON serialized values.
pub trait KeyValueStore {
    /// Returns `None` if no value is stored under the key.
    fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, Error>;
    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), Error>;
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    #[strum(serialize = "state")]
    State,
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("quota exceeded")]
    QuotaExceeded,
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<Error> for domain::StorageError {
    fn from(value: Error) -> Self {
        match value {
            Error::QuotaExceeded => domain::StorageError::QuotaExceeded,
            Error::Serde(err) => domain::StorageError::Corrupt(err.to_string()),
            Error::Other(err) => domain::StorageError::Other(err.into()),
        }
    }
}

impl From<Error> for domain::ReadError {
    fn from(value: Error) -> Self {
        domain::ReadError::Storage(value.into())
    }
}

impl From<Error> for domain::WriteError {
    fn from(value: Error) -> Self {
        domain::WriteError::Storage(value.into())
    }
}
