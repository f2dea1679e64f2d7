//! Resolve arguments and configuration, run the sync, print the outcome.

use std::{env, path::PathBuf};

use anyhow::{Result, bail};

use super::{args::Arguments, exit_status::ExitStatus, report};
use crate::{
    config::{ConfigLoadResult, load_config, load_config_file},
    freshness::LocalePaths,
    sync::{LocaleSync, SyncOutcome},
};

fn resolve_config(args: &Arguments) -> Result<ConfigLoadResult> {
    match &args.config {
        Some(path) => load_config_file(path),
        None => load_config(&env::current_dir()?),
    }
}

/// Directories to check, with command-line overrides applied.
///
/// Also returns the label used in the final status line: the output
/// directory as the user wrote it, not the resolved path.
fn resolve_paths(args: &Arguments, loaded: &ConfigLoadResult) -> (LocalePaths, String) {
    let xliff_dir: PathBuf = args.xliff_dir.clone().unwrap_or_else(|| loaded.xliff_dir());

    let (output_dir, output_label) = match &args.output_dir {
        Some(dir) => (dir.clone(), dir.display().to_string()),
        None => (loaded.output_dir(), loaded.config.output.output_dir.clone()),
    };

    (LocalePaths::new(xliff_dir, output_dir), output_label)
}

pub fn run(args: &Arguments) -> Result<ExitStatus> {
    let loaded = resolve_config(args)?;
    let (paths, output_label) = resolve_paths(args, &loaded);
    let regenerator = args.regenerate_command();

    if args.verbose {
        eprintln!("Using {}", loaded.path.display());
        if let Some(source_locale) = &loaded.config.source_locale {
            eprintln!("Source locale: {}", source_locale);
        }
    }

    let sync = LocaleSync::new(&loaded.config, paths).force(args.force);

    match sync.run(&regenerator)? {
        SyncOutcome::MissingSource { locale, summary } => {
            if args.verbose {
                report::print_statuses(&summary, sync.paths());
            }
            report::print_missing_source(&locale);
            Ok(ExitStatus::Failure)
        }
        SyncOutcome::Checked { summary, rebuild } => {
            if args.verbose {
                report::print_statuses(&summary, sync.paths());
            }

            if let Some(outcome) = rebuild {
                if args.verbose {
                    eprintln!(
                        "Ran `{}` ({})",
                        outcome.command,
                        outcome.status_description()
                    );
                    if outcome.tally.is_empty() {
                        eprintln!("No missing-translation warnings");
                    }
                }
                report::print_rebuild(&outcome.tally);

                if !outcome.success {
                    if !args.allow_failed_rebuild {
                        bail!(
                            "Regeneration command `{}` failed with {}",
                            outcome.command,
                            outcome.status_description()
                        );
                    }
                    report::print_rebuild_warning(&outcome);
                }
            }

            report::print_up_to_date(&output_label);
            Ok(ExitStatus::Success)
        }
    }
}
