//! CLI argument definitions using clap.
//!
//! `locale-sync` has a single mode of operation, so there are no subcommands:
//! every flag below tunes the check-then-rebuild run.

use std::path::PathBuf;

use clap::Parser;

use crate::rebuild::RegenerateCommand;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Path to lit-localize.json (default: search upward from the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// XLIFF directory (overrides interchange.xliffDir)
    #[arg(long, value_name = "DIR")]
    pub xliff_dir: Option<PathBuf>,

    /// Generated module directory (overrides output.outputDir)
    ///
    /// The final status line names this directory as given, e.g.
    /// `Locale ./src/locales is up-to-date`, rather than a fixed `./src`.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Command that regenerates the locale modules
    /// [default: npm run build-locales:build]
    #[arg(long, env = "LOCALE_SYNC_REGENERATE", value_name = "CMD")]
    pub regenerate: Option<String>,

    /// Don't fail when the regeneration command exits unsuccessfully
    #[arg(long)]
    pub allow_failed_rebuild: bool,

    /// Rebuild even if every locale is up-to-date
    #[arg(long)]
    pub force: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// The regeneration command to run, falling back to the npm script.
    pub fn regenerate_command(&self) -> RegenerateCommand {
        self.regenerate
            .as_deref()
            .and_then(RegenerateCommand::parse)
            .unwrap_or_default()
    }
}
