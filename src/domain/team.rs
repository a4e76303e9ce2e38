//! Two-player teams.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::DomainError;
use super::id::Participant;

/// An unordered pair of participants.
///
/// Members keep the order they were given in, which is how the team is
/// displayed and stored. Equality, hashing and ordering use the sorted
/// pair, so `Team::new("a", "b")` and `Team::new("b", "a")` are the same
/// team.
#[derive(Debug, Clone)]
pub struct Team {
    members: [Participant; 2],
}

impl Team {
    /// Pair two participants.
    ///
    /// No distinctness check is made here: the pairing generator pairs
    /// whatever it is handed. Use [`Team::try_from_roster`] for rosters
    /// that come from outside the crate.
    pub fn new(a: impl Into<Participant>, b: impl Into<Participant>) -> Self {
        Self {
            members: [a.into(), b.into()],
        }
    }

    /// Build a team from a stored roster, which must hold exactly two
    /// distinct participants.
    pub fn try_from_roster(roster: Vec<Participant>) -> Result<Self, DomainError> {
        match <[Participant; 2]>::try_from(roster) {
            Ok([a, b]) if a != b => Ok(Self::new(a, b)),
            Ok(members) => Err(DomainError::InvalidTeamSize {
                members: members.iter().map(|p| p.to_string()).collect(),
            }),
            Err(members) => Err(DomainError::InvalidTeamSize {
                members: members.iter().map(|p| p.to_string()).collect(),
            }),
        }
    }

    /// The two members, in the order given.
    pub fn members(&self) -> &[Participant; 2] {
        &self.members
    }

    /// The members, smallest first.
    fn key(&self) -> (&Participant, &Participant) {
        let [a, b] = &self.members;
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// The team's roster as a set.
    pub fn roster(&self) -> BTreeSet<&Participant> {
        self.members.iter().collect()
    }

    /// Whether `participant` plays for this team.
    pub fn contains(&self, participant: &Participant) -> bool {
        self.members.contains(participant)
    }

    /// The first member of `self` that also plays for `other`, if any.
    pub fn shared_with<'a>(&'a self, other: &Team) -> Option<&'a Participant> {
        self.members.iter().find(|p| other.contains(p))
    }

    /// Whether the two teams have no player in common.
    pub fn is_disjoint(&self, other: &Team) -> bool {
        self.shared_with(other).is_none()
    }

    /// Whether both rosters hold the same set of players.
    pub fn same_roster(&self, other: &Team) -> bool {
        self.roster() == other.roster()
    }

    /// Whether every player of `self` also plays for `other`.
    pub fn is_subset_of(&self, other: &Team) -> bool {
        self.members.iter().all(|p| other.contains(p))
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Team {}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Team {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Team {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.members[0], self.members[1])
    }
}
