//! Command-line interface definitions.
//!
//! Defines the CLI structure for the mistrz application using `clap`.
//! Read commands (`log`, `teams`, `matches`) never touch the store on disk
//! beyond loading it; `add` is the only command that writes.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Record round-robin doubles events and track team standings
#[derive(Parser, Debug)]
#[command(name = "mistrz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file [default: ~/.mistrz/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the event store, overriding the configured one
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the mistrz CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print recorded events with their champion and last place
    Log(LogArgs),

    /// Show win/loss standings for every team across all events
    Teams,

    /// Record a new event, asking for the result of each match
    Add(AddArgs),

    /// Preview the matches a set of participants would play
    Matches(MatchesArgs),
}

/// Arguments for the `log` subcommand.
#[derive(Parser, Debug)]
pub struct LogArgs {
    /// Number of most recent events to show (0 = all)
    #[arg(default_value = "0")]
    pub limit: usize,
}

/// Arguments for the `add` subcommand.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Participants of the event (at least four)
    #[arg(required = true, num_args = 1..)]
    pub participants: Vec<String>,

    /// Date of the event. Today if not provided
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for the `matches` subcommand.
#[derive(Parser, Debug)]
pub struct MatchesArgs {
    /// Participants to pair up
    #[arg(required = true, num_args = 1..)]
    pub participants: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_limit_defaults_to_all() {
        let cli = Cli::parse_from(["mistrz", "log"]);
        match cli.command {
            Commands::Log(args) => assert_eq!(args.limit, 0),
            other => panic!("expected log, got {other:?}"),
        }
    }

    #[test]
    fn add_takes_participants_and_date() {
        let cli = Cli::parse_from(["mistrz", "add", "a", "b", "c", "d", "--date", "2024/05/17"]);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.participants, vec!["a", "b", "c", "d"]);
                assert_eq!(args.date.as_deref(), Some("2024/05/17"));
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mistrz", "teams", "--json", "--store", "x.json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.store, Some(PathBuf::from("x.json")));
    }
}
