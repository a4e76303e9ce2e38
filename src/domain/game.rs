//! Played games and the matches they come from.

use std::fmt;

use super::error::DomainError;
use super::team::Team;

/// Which side of a match won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first team of the match (`team_a`).
    A,
    /// The second team of the match (`team_b`).
    B,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "a"),
            Side::B => write!(f, "b"),
        }
    }
}

/// A scheduled pairing of two disjoint teams, before it is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub team_a: Team,
    pub team_b: Team,
}

impl Match {
    /// Record the result of this match.
    pub fn played(self, winner: Side, shutout: bool) -> Result<Game, DomainError> {
        Game::try_new(self.team_a, self.team_b, winner, shutout)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs. {}", self.team_a, self.team_b)
    }
}

/// One played game between two disjoint teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    team_a: Team,
    team_b: Team,
    winner: Side,
    shutout: bool,
}

impl Game {
    /// Create a game, rejecting teams that share a participant.
    pub fn try_new(
        team_a: Team,
        team_b: Team,
        winner: Side,
        shutout: bool,
    ) -> Result<Self, DomainError> {
        if let Some(shared) = team_a.shared_with(&team_b) {
            return Err(DomainError::OverlappingTeams {
                team_a: team_a.to_string(),
                team_b: team_b.to_string(),
                shared: shared.clone(),
            });
        }
        Ok(Self {
            team_a,
            team_b,
            winner,
            shutout,
        })
    }

    pub fn team_a(&self) -> &Team {
        &self.team_a
    }

    pub fn team_b(&self) -> &Team {
        &self.team_b
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn winner(&self) -> Side {
        self.winner
    }

    /// Whether the game was a one-sided ("flawless") win.
    pub fn is_shutout(&self) -> bool {
        self.shutout
    }

    /// The team that won.
    pub fn winning_team(&self) -> &Team {
        self.team(self.winner)
    }

    /// The team that lost.
    pub fn losing_team(&self) -> &Team {
        self.team(self.winner.opponent())
    }
}
