//! Handler for the `matches` command.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::domain::{generate_matches, Participant};
use crate::error::Result;

/// Print the matches `participants` would play, without recording anything.
pub fn execute(participants: Vec<String>) -> Result<()> {
    let participants: Vec<Participant> = participants.into_iter().map(Participant::from).collect();
    let matches = generate_matches(&participants);

    if output::is_json() {
        for (i, pairing) in matches.iter().enumerate() {
            output::record(
                "match",
                json!({
                    "number": i + 1,
                    "team_a": pairing.team_a.members(),
                    "team_b": pairing.team_b.members(),
                }),
            );
        }
        return Ok(());
    }

    if matches.is_empty() {
        output::warning("Not enough participants for a doubles match (need at least 4).");
        return Ok(());
    }

    let text: String = matches
        .iter()
        .enumerate()
        .map(|(i, pairing)| format!("{:>2}. {pairing}\n", i + 1))
        .collect();
    output::lines(&text);
    Ok(())
}
