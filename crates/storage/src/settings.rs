use log::Level;
use serde::{Deserialize, Serialize};

use crate::{Error, Key, KeyValueStore, Repository};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Number of log entries kept in storage.
    pub max_log_entries: usize,
    #[serde(with = "crate::log::LevelDef")]
    pub log_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_log_entries: 100,
            log_level: Level::Debug,
        }
    }
}

pub trait SettingsRepository {
    /// Returns the default settings if no settings were stored.
    fn read_settings(&self) -> Result<Settings, Error>;
    fn write_settings(&self, settings: &Settings) -> Result<(), Error>;
}

impl<S: KeyValueStore> SettingsRepository for Repository<S> {
    fn read_settings(&self) -> Result<Settings, Error> {
        Ok(self.storage.get(Key::Settings)?.unwrap_or_default())
    }

    fn write_settings(&self, settings: &Settings) -> Result<(), Error> {
        self.storage.set(Key::Settings, settings)
    }
}
