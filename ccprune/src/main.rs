// ccprune/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing::Level;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Setup Logging (Tracing) on stderr, stdout is for the user
    // ccprune -vv ... to see the details
    init_tracing(cli.verbose);

    commands::prune::execute(cli)
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
