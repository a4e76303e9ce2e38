//! Row types for the JSON event file.
//!
//! The file is an object keyed by event id (as a decimal string):
//!
//! ```json
//! {
//!     "1": {
//!         "date": "2024/05/17",
//!         "games": [
//!             { "team_a": ["ala", "bartek"], "team_b": ["celina", "darek"], "winner": "team_a", "zero": false }
//!         ]
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Event, EventId, Game, Participant, Side, Team};
use crate::error::StoreError;

/// Whole-file contents, keyed by id. `BTreeMap` keeps keys sorted on write.
pub type EventFile = BTreeMap<String, EventRow>;

/// Stored form of an [`Event`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRow {
    pub date: String,
    pub games: Vec<GameRow>,
}

/// Stored form of a [`Game`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRow {
    pub team_a: Vec<Participant>,
    pub team_b: Vec<Participant>,
    pub winner: WinnerRow,
    /// Shutout flag.
    pub zero: bool,
}

/// Positional winner label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinnerRow {
    #[serde(rename = "team_a")]
    TeamA,
    #[serde(rename = "team_b")]
    TeamB,
}

impl From<Side> for WinnerRow {
    fn from(side: Side) -> Self {
        match side {
            Side::A => WinnerRow::TeamA,
            Side::B => WinnerRow::TeamB,
        }
    }
}

impl From<WinnerRow> for Side {
    fn from(row: WinnerRow) -> Self {
        match row {
            WinnerRow::TeamA => Side::A,
            WinnerRow::TeamB => Side::B,
        }
    }
}

impl GameRow {
    fn from_game(game: &Game) -> Self {
        Self {
            team_a: game.team_a().members().to_vec(),
            team_b: game.team_b().members().to_vec(),
            winner: game.winner().into(),
            zero: game.is_shutout(),
        }
    }

    fn into_game(self) -> Result<Game, crate::domain::DomainError> {
        let team_a = Team::try_from_roster(self.team_a)?;
        let team_b = Team::try_from_roster(self.team_b)?;
        Game::try_new(team_a, team_b, self.winner.into(), self.zero)
    }
}

impl EventRow {
    /// Convert an event into its stored key and row.
    pub fn from_event(event: &Event) -> (String, Self) {
        let row = Self {
            date: event.date().to_string(),
            games: event.games().iter().map(GameRow::from_game).collect(),
        };
        (event.id().to_string(), row)
    }

    /// Validate a stored row back into an event.
    pub fn into_event(self, key: &str) -> Result<Event, StoreError> {
        let id = key
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(EventId::new)
            .ok_or_else(|| StoreError::InvalidId {
                key: key.to_string(),
            })?;
        let invalid = |source| StoreError::InvalidEvent {
            key: key.to_string(),
            source,
        };
        let games = self
            .games
            .into_iter()
            .map(GameRow::into_game)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;
        Event::try_new(id, self.date, games).map_err(invalid)
    }
}
