use anyhow::Result;
use bookscape::args::Cli;
use bookscape::commands::Commands;
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Running "bookscape" with no subcommand starts the interactive shell.
    let command = cli.command.unwrap_or(Commands::Shell);

    // Skip logger setup for the shell unless the user asked for logging,
    // since output would clobber the prompt.
    match (&command, cli.log_mode, cli.verbose) {
        (Commands::Shell, None, 0) => (),
        _ => logutil::init(cli.verbose, cli.log_mode.unwrap_or_default().into()),
    }

    info!(version = env!("CARGO_PKG_VERSION"), "starting...");

    command.run(cli.connection)
}
