//! Dated events and the ordered log that owns them.

use super::error::DomainError;
use super::game::Game;
use super::id::EventId;
use super::outcome::{derive_outcome, Outcome};

/// A dated session of games.
///
/// Events are immutable once built. Champion and last place are derived on
/// request through [`Event::outcome`] and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    date: String,
    games: Vec<Game>,
}

impl Event {
    /// Create an event, rejecting an empty game list.
    pub fn try_new(id: EventId, date: impl Into<String>, games: Vec<Game>) -> Result<Self, DomainError> {
        if games.is_empty() {
            return Err(DomainError::EmptyEvent);
        }
        Ok(Self {
            id,
            date: date.into(),
            games,
        })
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Display name, `#<id> <date>`.
    pub fn name(&self) -> String {
        format!("#{} {}", self.id, self.date)
    }

    /// Champion and last place of this event.
    pub fn outcome(&self) -> Outcome {
        derive_outcome(&self.games)
    }
}

/// Events ordered by id.
///
/// The log is the only place ids are handed out: a new event gets one more
/// than the highest id present, and loaded events keep the id they were
/// stored with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from events carrying explicit ids, in any order.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Result<Self, DomainError> {
        let mut log = Self::new();
        for event in events {
            log.insert(event)?;
        }
        Ok(log)
    }

    /// Insert an event with an explicit id, keeping id order.
    pub fn insert(&mut self, event: Event) -> Result<(), DomainError> {
        match self.events.binary_search_by_key(&event.id, Event::id) {
            Ok(_) => Err(DomainError::DuplicateEventId(event.id)),
            Err(pos) => {
                self.events.insert(pos, event);
                Ok(())
            }
        }
    }

    /// The id the next appended event will receive.
    pub fn next_id(&self) -> Result<EventId, DomainError> {
        match self.events.last() {
            None => Ok(EventId::FIRST),
            Some(event) => event.id.next().ok_or(DomainError::IdExhausted(event.id)),
        }
    }

    /// Append a new event under the next id.
    pub fn append(&mut self, date: impl Into<String>, games: Vec<Game>) -> Result<&Event, DomainError> {
        let event = Event::try_new(self.next_id()?, date, games)?;
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }

    /// All events in id order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The trailing `n` events; `0` means all of them.
    pub fn last(&self, n: usize) -> &[Event] {
        if n == 0 || n >= self.events.len() {
            &self.events
        } else {
            &self.events[self.events.len() - n..]
        }
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events
            .binary_search_by_key(&id, Event::id)
            .ok()
            .map(|pos| &self.events[pos])
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
