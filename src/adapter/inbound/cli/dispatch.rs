//! Command dispatch: wires configuration, output and adapters to handlers.

use tracing::debug;

use super::command::{Cli, Commands};
use super::output::{self, OutputConfig};
use super::prompt::TerminalScorer;
use super::{add, log, matches, paths, teams};
use crate::adapter::outbound::json::JsonStore;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run the parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.color.resolve()));

    let config = Config::resolve(cli.config.as_deref(), &paths::default_config())?;
    config.init_logging(cli.verbose);

    let store_path = cli.store.unwrap_or_else(|| config.store.path.clone());
    debug!(store = %store_path.display(), "Using event store");
    let store = JsonStore::new(store_path);

    match cli.command {
        Commands::Log(args) => log::execute(&store, args.limit),
        Commands::Teams => teams::execute(&store),
        Commands::Add(args) => {
            let date = args.date.unwrap_or_else(|| config.display.today());
            add::execute(&store, &mut TerminalScorer::new(), args.participants, date)
        }
        Commands::Matches(args) => matches::execute(args.participants),
    }
}
