//! Handler for the `add` command.

use crate::adapter::inbound::cli::{log, output};
use crate::application::record_event;
use crate::domain::{Match, Participant};
use crate::error::{Error, Result};
use crate::port::{Scorer, Store};

/// Record a new event for `participants`, asking `scorer` for each result.
pub fn execute(
    store: &impl Store,
    scorer: &mut impl Scorer,
    participants: Vec<String>,
    date: String,
) -> Result<()> {
    if output::is_json() {
        return Err(Error::InvalidInput(
            "add is interactive and cannot run with --json".to_string(),
        ));
    }

    let participants: Vec<Participant> = participants.into_iter().map(Participant::from).collect();
    let event = record_event(store, scorer, &participants, &date, announce)?;

    output::success(&format!("Recorded event {}", event.name()));
    log::print_events(std::slice::from_ref(&event));
    Ok(())
}

fn announce(number: usize, pairing: &Match) {
    output::section(&format!("======== GAME #{number} ========"));
    output::note(&format!("a: {} VS. b: {}", pairing.team_a, pairing.team_b));
}
