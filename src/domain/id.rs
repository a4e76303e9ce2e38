//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Participant identifier - newtype for type safety.
///
/// Participants are opaque names; two participants are the same player
/// only when their names match exactly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Create a new Participant from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the participant name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Participant {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Participant {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Event identifier.
///
/// Ids are positive and assigned in creation order by the
/// [`EventLog`](super::EventLog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(u32);

impl EventId {
    /// The id given to the first event of an empty log.
    pub const FIRST: EventId = EventId(1);

    /// Create an EventId, rejecting zero.
    #[must_use]
    pub fn new(id: u32) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The id following this one, or `None` at `u32::MAX`.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_new_and_as_str() {
        let p = Participant::new("kuba");
        assert_eq!(p.as_str(), "kuba");
    }

    #[test]
    fn participant_equality_is_exact() {
        assert_eq!(Participant::from("Ola"), Participant::from("Ola".to_string()));
        assert_ne!(Participant::from("Ola"), Participant::from("ola"));
    }

    #[test]
    fn participant_display() {
        assert_eq!(format!("{}", Participant::new("display-test")), "display-test");
    }

    #[test]
    fn event_id_rejects_zero() {
        assert!(EventId::new(0).is_none());
        assert_eq!(EventId::new(7).map(EventId::get), Some(7));
    }

    #[test]
    fn event_id_next() {
        assert_eq!(EventId::FIRST.next().map(EventId::get), Some(2));
    }

    #[test]
    fn event_id_next_stops_at_max() {
        let last = EventId::new(u32::MAX).unwrap();
        assert_eq!(last.next(), None);
    }
}
