//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions so tests focus on assertions
//! rather than construction boilerplate.

use crate::domain::{Event, EventId, EventLog, Game, Participant, Side, Team};

/// Participants from a list of names.
pub fn participants(names: &[&str]) -> Vec<Participant> {
    names.iter().copied().map(Participant::from).collect()
}

/// Generate `n` participants named `p1`, `p2`, ..., `p{n}`.
pub fn make_participants(n: usize) -> Vec<Participant> {
    (1..=n).map(|i| Participant::from(format!("p{i}"))).collect()
}

/// A team from two names.
pub fn team(a: &str, b: &str) -> Team {
    Team::new(a, b)
}

/// Parse `'a'` / `'b'` into a [`Side`].
///
/// # Panics
///
/// Panics on any other character.
pub fn side(winner: char) -> Side {
    match winner {
        'a' => Side::A,
        'b' => Side::B,
        other => panic!("winner must be 'a' or 'b', got {other:?}"),
    }
}

/// A played game; `winner` is `'a'` or `'b'`.
///
/// # Panics
///
/// Panics if the two teams overlap.
pub fn game(a: (&str, &str), b: (&str, &str), winner: char, shutout: bool) -> Game {
    Game::try_new(team(a.0, a.1), team(b.0, b.1), side(winner), shutout)
        .expect("test game teams must be disjoint")
}

/// An event with an explicit id.
///
/// # Panics
///
/// Panics on a zero id or an empty game list.
pub fn event(id: u32, date: &str, games: Vec<Game>) -> Event {
    let id = EventId::new(id).expect("test event id must be positive");
    Event::try_new(id, date, games).expect("test event must have games")
}

/// Two small events over four players.
///
/// Event #1: `a` wins both games and `d` loses both.
/// Event #2: `c` wins all three games and nobody loses every game.
pub fn sample_log() -> EventLog {
    EventLog::from_events([
        event(
            1,
            "2024/05/17",
            vec![
                game(("a", "b"), ("c", "d"), 'a', true),
                game(("a", "c"), ("b", "d"), 'a', false),
            ],
        ),
        event(
            2,
            "2024/05/24",
            vec![
                game(("a", "b"), ("c", "d"), 'b', false),
                game(("a", "c"), ("b", "d"), 'a', false),
                game(("a", "d"), ("b", "c"), 'b', true),
            ],
        ),
    ])
    .expect("sample ids are unique")
}
