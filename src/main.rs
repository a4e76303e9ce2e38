use clap::Parser;

use mistrz::adapter::inbound::cli::command::Cli;
use mistrz::adapter::inbound::cli::{diagnostic, dispatch, output};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = dispatch::execute(cli) {
        match diagnostic::report(&e) {
            Some(report) => eprintln!("{report:?}"),
            None => output::error(&e.to_string()),
        }
        std::process::exit(1);
    }
}
