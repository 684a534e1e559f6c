//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`] or [`health`]. Each handler lives in its
//! own submodule.

pub mod health;
pub mod run;

use crate::cli::{Cli, Commands};
use crate::error::RelayError;

pub async fn dispatch(cli: Cli) -> Result<(), RelayError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(*args).await,
        Some(Commands::Health(args)) => health::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  omdb-relay v{version} \u{2014} HTTP relay for the OMDb movie API\n\n  \
         No command provided. To get started:\n\n    \
         OMDB_API_KEY=... omdb-relay run   Start the relay on port 3001\n    \
         omdb-relay health                 Check a running instance\n    \
         omdb-relay --help                 See all commands and options\n"
    );
}
