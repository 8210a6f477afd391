// ccprune/src/cli.rs
//
// Single source of truth for the CLI definition (Clap struct).

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use ccprune_core::infrastructure::config::SettingsOverrides;

#[derive(Parser, Debug)]
#[command(name = "ccprune")]
#[command(
    about = "🧹 Retains the .c/.S files listed in a JSON manifest and deletes the others",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON manifest (ex: "compile_commands.json")
    pub manifest: PathBuf,

    /// Automatically confirm deletion
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Directory to scan (default: current directory)
    #[arg(short, long, env = "CCPRUNE_ROOT")]
    pub root: Option<PathBuf>,

    /// Show every file that would be deleted, delete nothing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Source extension to match, repeatable (default: c, s)
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Number of files listed before asking for confirmation
    #[arg(long, value_name = "N")]
    pub preview: Option<usize>,

    /// Settings file (default: <root>/ccprune.yaml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More logs on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            root: self.root.clone(),
            config_file: self.config.clone(),
            extensions: self.extensions.clone(),
            preview_limit: self.preview,
            assume_yes: self.yes,
            dry_run: self.dry_run,
        }
    }
}
