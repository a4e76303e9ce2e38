//! Store port for persistence operations.

use crate::domain::EventLog;
use crate::error::Result;

/// Storage for the event log.
///
/// Implementations load and save the whole log at once; the log itself
/// decides ids and ordering.
pub trait Store {
    /// Load every stored event. An absent store loads as an empty log.
    fn load(&self) -> Result<EventLog>;

    /// Replace the stored events with `log`.
    fn save(&self, log: &EventLog) -> Result<()>;
}
