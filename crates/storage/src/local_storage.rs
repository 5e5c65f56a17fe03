use anyhow::anyhow;
use gloo_storage::{Storage as GlooStorage, errors::StorageError};
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Key, KeyValueStore};

/// Browser local storage.
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, Error> {
        match gloo_storage::LocalStorage::get(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), Error> {
        gloo_storage::LocalStorage::set(key, value).map_err(Error::from)
    }
}

impl From<StorageError> for Error {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::SerdeError(err) => Error::Serde(err),
            StorageError::JsError(err) if err.name == "QuotaExceededError" => Error::QuotaExceeded,
            err => Error::Other(anyhow!(err.to_string())),
        }
    }
}
