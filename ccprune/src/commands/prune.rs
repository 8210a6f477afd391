// ccprune/src/commands/prune.rs
//
// USE CASE: Prune unlisted sources.

use std::io;

use ccprune_core::PruneError;
use ccprune_core::application::{PrunePorts, run_prune};
use ccprune_core::infrastructure::config::load_settings;
use ccprune_core::infrastructure::{ConsoleConfirmer, FsRemover, JsonManifest, WalkScanner};
use miette::Diagnostic;

use crate::cli::Cli;

pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let settings = match load_settings(cli.overrides()) {
        Ok(settings) => settings,
        Err(e) => fail(&PruneError::from(e)),
    };
    tracing::debug!(?settings, "Settings resolved");

    let mut confirmer = ConsoleConfirmer::stdio();
    let ports = PrunePorts {
        manifest: &JsonManifest,
        scanner: &WalkScanner,
        confirmer: &mut confirmer,
        remover: &FsRemover,
    };

    let mut stdout = io::stdout();
    match run_prune(ports, &cli.manifest, &settings, &mut stdout) {
        Ok(outcome) if outcome.is_success() => Ok(()),
        // Failures were already printed one by one
        Ok(_) => std::process::exit(1),
        Err(e) => fail(&e),
    }
}

fn fail(err: &PruneError) -> ! {
    eprintln!("❌ {}", err);
    if let Some(help) = err.help() {
        eprintln!("   👉 {}", help);
    }
    std::process::exit(1);
}
