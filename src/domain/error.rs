//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//! Conditions that merely have no answer (no champion, no matches, a zero
//! ratio) are plain values and never show up here.
//!
//! # Examples
//!
//! ```
//! use mistrz::domain::{DomainError, Game, Side, Team};
//!
//! let result = Game::try_new(
//!     Team::new("ala", "bartek"),
//!     Team::new("ala", "celina"), // ala plays on both sides!
//!     Side::A,
//!     false,
//! );
//!
//! assert!(matches!(result, Err(DomainError::OverlappingTeams { .. })));
//! ```

use thiserror::Error;

use super::id::{EventId, Participant};

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A team roster must name exactly two distinct participants.
    #[error("team must have exactly two distinct members, got [{}]", .members.join(", "))]
    InvalidTeamSize {
        /// The roster that was provided.
        members: Vec<String>,
    },

    /// The two teams of a game cannot share a player.
    #[error("teams {team_a} and {team_b} share participant {shared}")]
    OverlappingTeams {
        /// Display form of the first team.
        team_a: String,
        /// Display form of the second team.
        team_b: String,
        /// The participant present on both sides.
        shared: Participant,
    },

    /// Events must have at least one game.
    #[error("event must contain at least one game")]
    EmptyEvent,

    /// Ids are unique within an event log.
    #[error("event #{0} already exists")]
    DuplicateEventId(EventId),

    /// The log already holds the largest representable id.
    #[error("no event id left after #{0}")]
    IdExhausted(EventId),
}
