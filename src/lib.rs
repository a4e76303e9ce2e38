//! Mistrz - round-robin doubles event recorder.
//!
//! A group of players meets, every possible two-player team plays every
//! disjoint team once, and each result is written down. From the recorded
//! events the crate derives the champion ("Mistrz", on every winning team)
//! and the last place ("Pastuch", on every losing team) of each event, and
//! win/loss standings per team across all events.
//!
//! # Modules
//!
//! - [`domain`] - Pairing, per-event honors, standings and the event log
//! - [`port`] - `Store` and `Scorer` seams
//! - [`adapter`] - JSON file store, in-memory store and the `mistrz` CLI
//! - [`application`] - Recording a new event
//! - [`infrastructure`] - Configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use mistrz::domain::{derive_outcome, generate_matches, Participant, Side};
//!
//! let players: Vec<Participant> = ["ala", "ola", "ela", "iza"]
//!     .into_iter()
//!     .map(Participant::from)
//!     .collect();
//! let games: Vec<_> = generate_matches(&players)
//!     .into_iter()
//!     .map(|m| m.played(Side::A, false))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(games.len(), 3);
//! assert_eq!(derive_outcome(&games).champion, Some(Participant::from("ala")));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
