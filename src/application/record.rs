//! Recording a new event.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::domain::{generate_matches, Event, Match, Participant};
use crate::error::{Error, Result};
use crate::port::{Scorer, Store};

/// Reject participant lists that cannot produce a proper event.
///
/// The pairing generator itself tolerates both cases (it just yields fewer
/// or no matches); recording an event requires at least one game and
/// distinct players.
pub fn check_participants(participants: &[Participant]) -> Result<()> {
    let mut seen = HashSet::new();
    if let Some(repeated) = participants.iter().find(|p| !seen.insert(*p)) {
        return Err(Error::InvalidInput(format!(
            "participant '{repeated}' is listed more than once"
        )));
    }
    if participants.len() < 4 {
        return Err(Error::InvalidInput(format!(
            "at least 4 participants are needed for a doubles match, got {}",
            participants.len()
        )));
    }
    Ok(())
}

/// Generate the matches for `participants`, score each one through
/// `scorer`, append the event to the stored log and save it.
///
/// `on_match` runs before each match is scored, with its 1-based number.
/// Nothing is written if scoring fails part-way.
pub fn record_event(
    store: &impl Store,
    scorer: &mut impl Scorer,
    participants: &[Participant],
    date: &str,
    mut on_match: impl FnMut(usize, &Match),
) -> Result<Event> {
    check_participants(participants)?;

    let mut log = store.load()?;
    let matches = generate_matches(participants);
    debug!(participants = participants.len(), matches = matches.len(), "Generated matches");

    let mut games = Vec::with_capacity(matches.len());
    for (i, pairing) in matches.into_iter().enumerate() {
        let number = i + 1;
        on_match(number, &pairing);
        let winner = scorer.winner(number, &pairing)?;
        let shutout = scorer.shutout(number, &pairing)?;
        games.push(pairing.played(winner, shutout)?);
    }

    let event = log.append(date, games)?.clone();
    store.save(&log)?;
    info!(event = %event.name(), games = event.games().len(), "Recorded event");
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryStore;
    use crate::domain::{Side, Team};
    use crate::testkit::domain::{make_participants, participants, sample_log};
    use crate::testkit::scorer::ScriptedScorer;

    #[test]
    fn rejects_small_groups() {
        let err = check_participants(&participants(&["a", "b", "c"])).unwrap_err();
        assert!(err.to_string().contains("at least 4"));
    }

    #[test]
    fn rejects_repeated_names() {
        let err = check_participants(&participants(&["a", "b", "a", "c"])).unwrap_err();
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn records_every_match_in_order() {
        let store = MemoryStore::new();
        let mut scorer = ScriptedScorer::new([(Side::A, true), (Side::B, false), (Side::A, false)]);
        let mut announced = Vec::new();

        let event = record_event(
            &store,
            &mut scorer,
            &make_participants(4),
            "2024/05/17",
            |n, _| announced.push(n),
        )
        .unwrap();

        assert_eq!(announced, vec![1, 2, 3]);
        assert_eq!(event.id().get(), 1);
        assert_eq!(event.games().len(), 3);
        assert_eq!(event.games()[0].winning_team(), &Team::new("p1", "p2"));
        assert!(event.games()[0].is_shutout());
        assert_eq!(event.games()[1].winning_team(), &Team::new("p2", "p4"));
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(scorer.asked().len(), 3);
    }

    #[test]
    fn appends_after_existing_events() {
        let store = MemoryStore::with_log(sample_log());
        let mut scorer = ScriptedScorer::new([(Side::A, false); 3]);

        let event = record_event(&store, &mut scorer, &make_participants(4), "d", |_, _| {}).unwrap();

        assert_eq!(event.id().get(), 3);
        assert_eq!(store.snapshot().len(), 3);
    }

    #[test]
    fn scorer_failure_saves_nothing() {
        let store = MemoryStore::new();
        let mut scorer = ScriptedScorer::new([(Side::A, false)]);

        let result = record_event(&store, &mut scorer, &make_participants(4), "d", |_, _| {});

        assert!(result.is_err());
        assert_eq!(store.save_count(), 0);
    }
}
