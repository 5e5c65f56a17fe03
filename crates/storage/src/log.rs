use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Local};
use log::{Level, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

use crate::{Key, KeyValueStore, Settings};

static LOG: Mutex<Option<Sink>> = Mutex::new(None);

pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    /// Adds an entry in front of all existing entries and drops the oldest entries exceeding
    /// `max_entries`.
    fn write_entry(&self, entry: Entry, max_entries: usize) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

impl Entry {
    fn new(record: &Record, now: DateTime<Local>) -> Self {
        Self {
            time: now.format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

struct Sink {
    repository: Arc<dyn Repository>,
    max_entries: usize,
}

impl Sink {
    fn write(&self, record: &Record) {
        let _ = self
            .repository
            .write_entry(Entry::new(record, Local::now()), self.max_entries);
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(repository: Arc<dyn Repository>, settings: &Settings) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(Sink {
            repository,
            max_entries: settings.max_log_entries,
        });
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(settings.log_level.to_level_filter()))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(log) = LOG.lock() {
            if let Some(ref sink) = *log {
                sink.write(record);
            }
        }
    }

    fn flush(&self) {}
}

impl<S: KeyValueStore + Send + Sync + 'static> Repository for crate::Repository<S> {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        Ok(self
            .storage
            .get(Key::Log)
            .map_err(|err| Error::Unknown(err.to_string()))?
            .unwrap_or_default())
    }

    fn write_entry(&self, entry: Entry, max_entries: usize) -> Result<(), Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(max_entries);
        self.storage
            .set(Key::Log, &entries)
            .map_err(|err| Error::Unknown(err.to_string()))
    }
}
