//! In-memory [`Store`] for tests and embedding.

use std::cell::RefCell;

use crate::domain::EventLog;
use crate::error::Result;
use crate::port::Store;

/// Keeps the saved log in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    log: RefCell<EventLog>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing log.
    pub fn with_log(log: EventLog) -> Self {
        Self {
            log: RefCell::new(log),
            saves: RefCell::new(0),
        }
    }

    /// Number of times [`Store::save`] was called.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }

    pub fn snapshot(&self) -> EventLog {
        self.log.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<EventLog> {
        Ok(self.log.borrow().clone())
    }

    fn save(&self, log: &EventLog) -> Result<()> {
        *self.log.borrow_mut() = log.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
