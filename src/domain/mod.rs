//! Core domain: pairing, per-event honors and team standings.
//!
//! Everything here is pure and synchronous. Persistence, prompting and
//! rendering live in [`crate::adapter`].

mod error;
mod event;
mod game;
mod id;
mod outcome;
mod pairing;
mod standings;
mod team;

pub use error::DomainError;
pub use event::{Event, EventLog};
pub use game::{Game, Match, Side};
pub use id::{EventId, Participant};
pub use outcome::{derive_outcome, Outcome};
pub use pairing::{generate_matches, generate_teams};
pub use standings::{compute_standings, win_ratio, Standings, TeamRecord};
pub use team::Team;
