//! Handler for the `teams` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::{compute_standings, Standings, TeamRecord};
use crate::error::Result;
use crate::port::Store;

#[derive(Tabled)]
struct StandingRow {
    #[tabled(rename = "TEAM")]
    team: String,
    #[tabled(rename = "WINS")]
    wins: String,
    #[tabled(rename = "LOSES")]
    losses: String,
    #[tabled(rename = "ZEROS")]
    zeros: String,
    #[tabled(rename = "RATIO")]
    ratio: String,
}

impl StandingRow {
    fn from_record(record: &TeamRecord) -> Self {
        Self {
            team: record.team.to_string(),
            wins: output::positive(record.wins),
            losses: output::negative(record.losses),
            zeros: output::shutout(record.shutout_losses),
            ratio: format_ratio(record),
        }
    }
}

/// One decimal place, or a bare `0` for a team with no decided games.
fn format_ratio(record: &TeamRecord) -> String {
    if record.played() == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", record.ratio)
    }
}

/// Print the standings of every team seen in the store.
pub fn execute(store: &impl Store) -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    let log = store.load()?;
    let standings = compute_standings(log.events());

    if output::is_json() {
        for record in standings.ranked() {
            output::record(
                "team",
                json!({
                    "team": record.team.members(),
                    "wins": record.wins,
                    "losses": record.losses,
                    "shutout_losses": record.shutout_losses,
                    "ratio": record.ratio,
                }),
            );
        }
        return Ok(());
    }

    if standings.is_empty() {
        output::note("No games recorded yet.");
        return Ok(());
    }
    output::lines(&render_table(&standings));
    Ok(())
}

fn render_table(standings: &Standings) -> String {
    let rows: Vec<_> = standings
        .ranked()
        .into_iter()
        .map(StandingRow::from_record)
        .collect();
    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Team;
    use crate::testkit::domain::sample_log;

    fn record(wins: u32, losses: u32) -> TeamRecord {
        TeamRecord {
            team: Team::new("a", "b"),
            wins,
            losses,
            shutout_losses: 0,
            ratio: crate::domain::win_ratio(wins, losses),
        }
    }

    #[test]
    fn ratio_without_decided_games_is_bare_zero() {
        assert_eq!(format_ratio(&record(0, 0)), "0");
        assert_eq!(format_ratio(&record(0, 2)), "0.0");
        assert_eq!(format_ratio(&record(1, 2)), "33.3");
    }

    #[test]
    fn table_lists_teams_by_wins() {
        let log = sample_log();
        let table = render_table(&compute_standings(log.events()));

        assert!(table.contains("TEAM"));
        assert!(table.contains("RATIO"));
        let first = table.find("[a, c]").unwrap();
        let last = table.find("[b, c]").unwrap();
        assert!(first < last);
        assert!(table.contains("100.0"));
        assert!(table.contains("50.0"));
    }
}
