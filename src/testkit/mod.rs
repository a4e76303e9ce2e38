//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for participants, teams, games, events.
//! - [`scorer`] - [`ScriptedScorer`](scorer::ScriptedScorer), a
//!   [`Scorer`](crate::port::Scorer) that replays canned results.

pub mod domain;
pub mod scorer;
