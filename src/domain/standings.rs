//! Cross-event team standings.
//!
//! A team is identified by its pair of players, independent of the event or
//! game it appeared in. Wins require the team's roster to equal the winning
//! roster; losses only require it to be contained in the losing roster.

use std::collections::HashSet;

use super::event::Event;
use super::game::Game;
use super::team::Team;

/// Win/loss record of one team across all events.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub team: Team,
    pub wins: u32,
    pub losses: u32,
    /// Losses in games marked as shutouts.
    pub shutout_losses: u32,
    /// Win percentage rounded to one decimal, `0.0` with no games played.
    pub ratio: f64,
}

impl TeamRecord {
    fn tally<'a>(team: Team, games: impl Iterator<Item = &'a Game>) -> Self {
        let (mut wins, mut losses, mut shutout_losses) = (0, 0, 0);
        for game in games {
            if team.same_roster(game.winning_team()) {
                wins += 1;
            } else if team.is_subset_of(game.losing_team()) {
                losses += 1;
                if game.is_shutout() {
                    shutout_losses += 1;
                }
            }
        }
        Self {
            team,
            wins,
            losses,
            shutout_losses,
            ratio: win_ratio(wins, losses),
        }
    }

    /// Games this team was counted in.
    #[must_use]
    pub fn played(&self) -> u32 {
        self.wins + self.losses
    }
}

/// Calculate win ratio as a percentage rounded to one decimal place.
#[must_use]
pub fn win_ratio(wins: u32, losses: u32) -> f64 {
    let total = wins + losses;
    if total == 0 {
        return 0.0;
    }
    let pct = f64::from(wins) / f64::from(total) * 100.0;
    (pct * 10.0).round() / 10.0
}

/// One record per distinct team, in the order teams were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standings {
    records: Vec<TeamRecord>,
}

impl Standings {
    /// Records in first-seen order.
    pub fn records(&self) -> &[TeamRecord] {
        &self.records
    }

    /// Records ordered by wins, most first. Ties keep first-seen order.
    pub fn ranked(&self) -> Vec<&TeamRecord> {
        let mut ranked: Vec<&TeamRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| b.wins.cmp(&a.wins));
        ranked
    }

    pub fn get(&self, team: &Team) -> Option<&TeamRecord> {
        self.records.iter().find(|r| &r.team == team)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<TeamRecord> {
        self.records
    }
}

/// Aggregate standings over every game of every event.
pub fn compute_standings(events: &[Event]) -> Standings {
    let games = || events.iter().flat_map(Event::games);

    let mut seen = HashSet::new();
    let mut teams = Vec::new();
    for game in games() {
        for team in [game.team_a(), game.team_b()] {
            if seen.insert(team) {
                teams.push(team.clone());
            }
        }
    }

    let records = teams
        .into_iter()
        .map(|team| TeamRecord::tally(team, games()))
        .collect();
    Standings { records }
}
