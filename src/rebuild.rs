//! Regeneration of the locale modules and summary of its warnings.
//!
//! lit-localize prints one line per untranslated message on stderr, e.g.
//! `fr message 3a1b… is missing translation`. Those lines are folded into a
//! per-locale [`WarningTally`]; anything else on stderr is ignored.

use std::{
    collections::BTreeMap,
    fmt,
    process::{Command, Stdio},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;

pub const DEFAULT_REGENERATE_COMMAND: &[&str] = &["npm", "run", "build-locales:build"];

/// Matches `<locale> message` at the start of a line.
/// `\w` is spelled out so non-ASCII word characters are not treated as locale ids.
static MISSING_MESSAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9A-Za-z_-]+) message").unwrap());

/// The external command that regenerates locale modules from XLIFF files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerateCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl RegenerateCommand {
    /// Split a command line on whitespace. Returns `None` for a blank string.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl Default for RegenerateCommand {
    fn default() -> Self {
        let mut parts = DEFAULT_REGENERATE_COMMAND.iter().map(|part| part.to_string());
        Self {
            program: parts.next().unwrap_or_default(),
            args: parts.collect(),
        }
    }
}

impl fmt::Display for RegenerateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What the regeneration step left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerationOutput {
    pub stderr: String,
    pub success: bool,
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
}

/// Runs the regeneration step.
///
/// Implemented by [`RegenerateCommand`]; tests substitute their own.
pub trait Regenerator {
    /// Human-readable description, used in error messages.
    fn describe(&self) -> String;

    /// Run to completion and capture stderr. Blocks the caller.
    fn regenerate(&self) -> Result<RegenerationOutput>;
}

impl Regenerator for RegenerateCommand {
    fn describe(&self) -> String {
        self.to_string()
    }

    fn regenerate(&self) -> Result<RegenerationOutput> {
        if self.program.is_empty() {
            bail!("Regeneration command is empty");
        }

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to run regeneration command `{}`", self))?;

        Ok(RegenerationOutput {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Missing-translation counts keyed by locale, iterated in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarningTally {
    counts: BTreeMap<String, usize>,
}

impl WarningTally {
    /// Tally every `<locale> message` line in a diagnostic stream.
    pub fn from_diagnostics(text: &str) -> Self {
        let mut tally = Self::default();
        for line in text.lines() {
            if let Some(caps) = MISSING_MESSAGE_REGEX.captures(line) {
                tally.record(&caps[1]);
            }
        }
        tally
    }

    pub fn record(&mut self, locale: &str) {
        *self.counts.entry(locale.to_string()).or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(locale, count)| (locale.as_str(), *count))
    }

    pub fn report_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(locale, count)| {
                format!("Locale '{}' has {} missing translations", locale, count)
            })
            .collect()
    }

    /// Report body: one line per locale, newline separated, no trailing newline.
    pub fn report(&self) -> String {
        self.report_lines().join("\n")
    }
}

#[cfg(test)]
impl WarningTally {
    pub fn get(&self, locale: &str) -> usize {
        self.counts.get(locale).copied().unwrap_or(0)
    }
}

/// Result of one regeneration run.
#[derive(Debug, Clone)]
pub struct RebuildOutcome {
    pub command: String,
    pub tally: WarningTally,
    pub success: bool,
    pub code: Option<i32>,
}

impl RebuildOutcome {
    pub fn status_description(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "termination by signal".to_string(),
        }
    }
}

/// Run the regenerator once and tally its warnings.
pub fn rebuild(regenerator: &dyn Regenerator) -> Result<RebuildOutcome> {
    let output = regenerator.regenerate()?;
    Ok(RebuildOutcome {
        command: regenerator.describe(),
        tally: WarningTally::from_diagnostics(&output.stderr),
        success: output.success,
        code: output.code,
    })
}
