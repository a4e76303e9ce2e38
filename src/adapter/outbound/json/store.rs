//! File-backed [`Store`] implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::model::{EventFile, EventRow};
use crate::domain::EventLog;
use crate::error::{Result, StoreError};
use crate::port::Store;

/// Event log stored as one pretty-printed JSON object.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<Option<EventFile>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                }
                .into())
            }
        };
        let file = serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(file))
    }

    fn write_file(&self, file: &EventFile) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        file.serialize(&mut ser)?;
        buf.push(b'\n');

        // Write next to the target and rename so a crash never leaves a
        // half-written store behind.
        let tmp = self.path.with_extension("json.tmp");
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        fs::write(&tmp, &buf).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }
}

impl Store for JsonStore {
    fn load(&self) -> Result<EventLog> {
        let Some(file) = self.read_file()? else {
            info!(path = %self.path.display(), "No event store found, starting empty");
            return Ok(EventLog::new());
        };

        let events = file
            .into_iter()
            .map(|(key, row)| row.into_event(&key))
            .collect::<std::result::Result<Vec<_>, StoreError>>()?;
        let log = EventLog::from_events(events)?;
        debug!(path = %self.path.display(), events = log.len(), "Loaded event store");
        Ok(log)
    }

    fn save(&self, log: &EventLog) -> Result<()> {
        let file: EventFile = log.events().iter().map(EventRow::from_event).collect();
        self.write_file(&file)?;
        info!(path = %self.path.display(), events = log.len(), "Saved event store");
        Ok(())
    }
}
