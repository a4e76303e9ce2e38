//! Handler for the `log` command.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::json::model::WinnerRow;
use crate::domain::{Event, Game, Side};
use crate::error::Result;
use crate::port::Store;

/// Print the last `limit` events (all of them when `limit` is 0).
pub fn execute(store: &impl Store, limit: usize) -> Result<()> {
    let log = store.load()?;
    print_events(log.last(limit));
    Ok(())
}

/// Print events in the `log` layout, or as JSON records.
pub fn print_events(events: &[Event]) {
    if output::is_json() {
        for event in events {
            output::record("event", event_json(event));
        }
        return;
    }
    if output::is_quiet() {
        return;
    }

    let mut text = String::new();
    for event in events {
        text.push_str(&render_event(event));
    }
    output::lines(&text);
}

fn render_event(event: &Event) -> String {
    let outcome = event.outcome();
    let mut text = format!("{}\n", output::heading(event.name()));
    if let Some(champion) = &outcome.champion {
        text.push_str(&format!("Mistrz: {champion}\n"));
    }
    if let Some(last_place) = &outcome.last_place {
        text.push_str(&format!("Pastuch: {last_place}\n"));
    }
    for game in event.games() {
        text.push_str(&format_game(game));
        text.push('\n');
    }
    text
}

/// One game line: the winner green, the loser red.
pub fn format_game(game: &Game) -> String {
    let paint = |side: Side| {
        let team = game.team(side);
        if side == game.winner() {
            output::positive(team)
        } else {
            output::negative(team)
        }
    };
    let mut line = format!("{} vs. {}", paint(Side::A), paint(Side::B));
    if game.is_shutout() {
        line.push(' ');
        line.push_str(&output::flawless_victory());
    }
    line
}

fn event_json(event: &Event) -> serde_json::Value {
    let outcome = event.outcome();
    json!({
        "id": event.id().get(),
        "date": event.date(),
        "champion": outcome.champion,
        "last_place": outcome.last_place,
        "games": event.games().iter().map(|game| json!({
            "team_a": game.team_a().members(),
            "team_b": game.team_b().members(),
            "winner": WinnerRow::from(game.winner()),
            "shutout": game.is_shutout(),
        })).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{game, sample_log};

    #[test]
    fn game_line_without_colors() {
        let line = format_game(&game(("a", "b"), ("c", "d"), 'b', false));
        assert_eq!(line, "[a, b] vs. [c, d]");
    }

    #[test]
    fn shutout_gets_banner() {
        let line = format_game(&game(("a", "b"), ("c", "d"), 'a', true));
        assert!(line.ends_with("FLAWLESS VICTORY!"));
    }

    #[test]
    fn event_lists_honors_before_games() {
        let log = sample_log();
        let text = render_event(&log.events()[0]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "#1 2024/05/17");
        assert_eq!(lines[1], "Mistrz: a");
        assert_eq!(lines[2], "Pastuch: d");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn json_record_carries_outcome() {
        let log = sample_log();
        let value = event_json(&log.events()[1]);
        assert_eq!(value["id"], 2);
        assert_eq!(value["champion"], "c");
        assert!(value["last_place"].is_null());
        assert_eq!(value["games"][2]["shutout"], true);
        assert_eq!(value["games"][0]["winner"], "team_b");
        assert_eq!(value["games"][1]["winner"], "team_a");
    }
}
