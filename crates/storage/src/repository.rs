use liftplan_domain as domain;

use crate::{Key, KeyValueStore, blob};

/// Persistence of the application state, the settings and the log in a key value store.
#[derive(Clone)]
pub struct Repository<S> {
    pub(crate) storage: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: KeyValueStore> domain::StateRepository for Repository<S> {
    fn read_state(&self) -> Result<Option<domain::State>, domain::ReadError> {
        let Some(state) = self.storage.get::<blob::State>(Key::State)? else {
            return Ok(None);
        };
        Ok(Some(domain::State::try_from(state).map_err(|err| {
            domain::StorageError::Corrupt(err.to_string())
        })?))
    }

    fn write_state(&self, state: &domain::State) -> Result<(), domain::WriteError> {
        Ok(self.storage.set(Key::State, &blob::State::from(state))?)
    }
}
