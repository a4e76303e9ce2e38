//! Per-event honors: the champion ("Mistrz") and last place ("Pastuch").
//!
//! The champion is whoever sat on the winning team in every game of the
//! event; last place is whoever sat on the losing team in every game. Both
//! are usually absent once an event has more than a couple of games.

use std::collections::BTreeSet;

use super::game::Game;
use super::id::Participant;
use super::team::Team;

/// Honors derived from one event's games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub champion: Option<Participant>,
    pub last_place: Option<Participant>,
}

/// Derive the champion and last place from an event's games.
///
/// When several players share the honor (a fixed pair that won every game)
/// the lexicographically smallest name is reported.
pub fn derive_outcome(games: &[Game]) -> Outcome {
    Outcome {
        champion: common_member(games.iter().map(Game::winning_team)),
        last_place: common_member(games.iter().map(Game::losing_team)),
    }
}

/// Intersect the rosters of `teams`, stopping as soon as the running
/// intersection is empty.
fn common_member<'a>(mut teams: impl Iterator<Item = &'a Team>) -> Option<Participant> {
    let first = teams.next()?.roster();
    let common = teams.try_fold(first, |acc, team| {
        let roster = team.roster();
        let next: BTreeSet<&Participant> = acc.intersection(&roster).copied().collect();
        if next.is_empty() {
            None
        } else {
            Some(next)
        }
    })?;
    common.into_iter().next().cloned()
}
