//! Console output for a sync run.
//!
//! Every printer has a `_to` variant taking a writer, so output can be tested
//! without capturing stdout. Colors come from `colored` and honor `NO_COLOR`.

use std::io::{self, Write};

use colored::Colorize;

use crate::{
    freshness::{Freshness, FreshnessSummary, LocalePaths, SOURCE_EXTENSION},
    rebuild::{RebuildOutcome, WarningTally},
};

pub const REBUILT_BANNER: &str = "Translation tables rebuilt.";

/// Print the fatal missing-XLIFF error to stderr.
pub fn print_missing_source(locale: &str) {
    print_missing_source_to(locale, &mut io::stderr().lock());
}

pub fn print_missing_source_to<W: Write>(locale: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} lit-localize expected '{}.{}', but XLF file is not present",
        "error:".bold().red(),
        locale,
        SOURCE_EXTENSION
    );
}

/// Print the banner and per-locale missing-translation counts to stdout.
pub fn print_rebuild(tally: &WarningTally) {
    print_rebuild_to(tally, &mut io::stdout().lock());
}

pub fn print_rebuild_to<W: Write>(tally: &WarningTally, writer: &mut W) {
    let _ = writeln!(writer, "{}\n{}\n", REBUILT_BANNER.green(), tally.report());
}

/// Warn that the regeneration command failed but the failure was allowed.
pub fn print_rebuild_warning(outcome: &RebuildOutcome) {
    print_rebuild_warning_to(outcome, &mut io::stderr().lock());
}

pub fn print_rebuild_warning_to<W: Write>(outcome: &RebuildOutcome, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} `{}` finished with {}",
        "warning:".bold().yellow(),
        outcome.command,
        outcome.status_description()
    );
}

/// Print the final status line to stdout.
pub fn print_up_to_date(output_label: &str) {
    print_up_to_date_to(output_label, &mut io::stdout().lock());
}

pub fn print_up_to_date_to<W: Write>(output_label: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}",
        format!("Locale {} is up-to-date", output_label).green()
    );
}

/// Print per-locale decisions to stderr (verbose mode).
pub fn print_statuses(summary: &FreshnessSummary, paths: &LocalePaths) {
    print_statuses_to(summary, paths, &mut io::stderr().lock());
}

pub fn print_statuses_to<W: Write>(
    summary: &FreshnessSummary,
    paths: &LocalePaths,
    writer: &mut W,
) {
    let _ = writeln!(
        writer,
        "{} {} -> {}",
        "Checking".bold(),
        paths.xliff_dir.display(),
        paths.output_dir.display()
    );
    for status in &summary.statuses {
        let label = match status.freshness {
            Freshness::UpToDate => status.freshness.label().green(),
            Freshness::Stale => status.freshness.label().yellow(),
            Freshness::MissingSource(_) => status.freshness.label().red(),
        };
        let _ = writeln!(writer, "  {}: {}", status.locale, label);
    }

    let stale: Vec<&str> = summary.stale_locales().collect();
    if !stale.is_empty() {
        let _ = writeln!(writer, "{} {}", "Stale:".bold(), stale.join(", "));
    }
}
