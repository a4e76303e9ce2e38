//! Round-robin pairing for doubles.
//!
//! Every unordered pair of participants forms a team, and every unordered
//! pair of teams without a common player forms a match. Both passes walk
//! the first index ascending, then the second index ascending, so the
//! output order follows the input order.

use super::game::Match;
use super::id::Participant;
use super::team::Team;

/// All two-player teams that can be formed from `participants`.
///
/// Returns C(N, 2) teams.
pub fn generate_teams(participants: &[Participant]) -> Vec<Team> {
    let mut teams = Vec::with_capacity(participants.len() * participants.len().saturating_sub(1) / 2);
    for (i, first) in participants.iter().enumerate() {
        for second in &participants[i + 1..] {
            teams.push(Team::new(first.clone(), second.clone()));
        }
    }
    teams
}

/// All matches between disjoint teams drawn from `participants`.
///
/// Fewer than four participants yields no matches. Repeated names are not
/// deduplicated: a repeated participant overlaps with every team that
/// contains the same name.
pub fn generate_matches(participants: &[Participant]) -> Vec<Match> {
    let teams = generate_teams(participants);
    let mut matches = Vec::new();
    for (i, team_a) in teams.iter().enumerate() {
        for team_b in &teams[i + 1..] {
            if team_a.is_disjoint(team_b) {
                matches.push(Match {
                    team_a: team_a.clone(),
                    team_b: team_b.clone(),
                });
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(names: &[&str]) -> Vec<Participant> {
        names.iter().copied().map(Participant::from).collect()
    }

    #[test]
    fn teams_follow_input_order() {
        let teams = generate_teams(&players(&["p1", "p2", "p3"]));
        assert_eq!(
            teams,
            vec![Team::new("p1", "p2"), Team::new("p1", "p3"), Team::new("p2", "p3")]
        );
    }

    #[test]
    fn four_players_give_three_matches() {
        let matches = generate_matches(&players(&["p1", "p2", "p3", "p4"]));
        let pairs: Vec<(Team, Team)> = matches.into_iter().map(|m| (m.team_a, m.team_b)).collect();
        assert_eq!(
            pairs,
            vec![
                (Team::new("p1", "p2"), Team::new("p3", "p4")),
                (Team::new("p1", "p3"), Team::new("p2", "p4")),
                (Team::new("p1", "p4"), Team::new("p2", "p3")),
            ]
        );
    }

    #[test]
    fn fewer_than_four_players_give_no_matches() {
        for n in 0..4 {
            let names: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
            let list: Vec<Participant> = names.into_iter().map(Participant::from).collect();
            assert!(generate_matches(&list).is_empty(), "n = {n}");
        }
    }

    #[test]
    fn repeated_participant_suppresses_overlapping_matches() {
        let matches = generate_matches(&players(&["a", "a", "b", "c"]));
        // [a, a] vs [b, c] is the only pair of teams with no common name.
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].team_a, Team::new("a", "a"));
        assert_eq!(matches[0].team_b, Team::new("b", "c"));
    }
}
