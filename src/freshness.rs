//! Staleness detection for generated locale modules.
//!
//! Each target locale has an authoritative XLIFF file (`<xliff_dir>/<locale>.xlf`)
//! and a generated module (`<output_dir>/<locale>.ts`). A locale is up-to-date
//! when its generated module is at least as new as its XLIFF file.
//!
//! Checks only read file metadata. Deciding what to do about a missing XLIFF
//! file is left to the caller.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::SystemTime,
};

use rayon::prelude::*;

pub const SOURCE_EXTENSION: &str = "xlf";
pub const OUTPUT_EXTENSION: &str = "ts";

/// Where the translation sources and generated modules live.
#[derive(Debug, Clone)]
pub struct LocalePaths {
    pub xliff_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl LocalePaths {
    pub fn new(xliff_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            xliff_dir: xliff_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn source_file(&self, locale: &str) -> PathBuf {
        self.xliff_dir
            .join(format!("{}.{}", locale, SOURCE_EXTENSION))
    }

    pub fn output_file(&self, locale: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", locale, OUTPUT_EXTENSION))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    /// Generated module is at least as new as the XLIFF file.
    UpToDate,
    /// Generated module is older than the XLIFF file, or was never generated.
    Stale,
    /// The XLIFF file for this locale does not exist.
    MissingSource(String),
}

impl Freshness {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, Freshness::UpToDate)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Freshness::UpToDate => "up-to-date",
            Freshness::Stale => "stale",
            Freshness::MissingSource(_) => "missing source",
        }
    }
}

fn modified(path: &Path) -> io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}

/// Classify a single locale.
pub fn check_locale(paths: &LocalePaths, locale: &str) -> Freshness {
    let Ok(source_time) = modified(&paths.source_file(locale)) else {
        return Freshness::MissingSource(locale.to_string());
    };

    // Never generated yet: expected on a first run.
    let Ok(output_time) = modified(&paths.output_file(locale)) else {
        return Freshness::Stale;
    };

    if source_time <= output_time {
        Freshness::UpToDate
    } else {
        Freshness::Stale
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStatus {
    pub locale: String,
    pub freshness: Freshness,
}

/// Per-locale results, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct FreshnessSummary {
    pub statuses: Vec<LocaleStatus>,
}

impl FreshnessSummary {
    /// The first locale, in configuration order, whose XLIFF file is missing.
    pub fn first_missing_source(&self) -> Option<&str> {
        self.statuses
            .iter()
            .find_map(|status| match &status.freshness {
                Freshness::MissingSource(locale) => Some(locale.as_str()),
                _ => None,
            })
    }

    /// True if any locale is not up-to-date.
    pub fn needs_rebuild(&self) -> bool {
        !self
            .statuses
            .iter()
            .all(|status| status.freshness.is_up_to_date())
    }

    pub fn stale_locales(&self) -> impl Iterator<Item = &str> {
        self.statuses
            .iter()
            .filter(|status| status.freshness == Freshness::Stale)
            .map(|status| status.locale.as_str())
    }
}

/// Check every locale. Checks run on the rayon pool; results keep the input order.
pub fn check_all(locales: &[String], paths: &LocalePaths) -> FreshnessSummary {
    let statuses = locales
        .par_iter()
        .map(|locale| LocaleStatus {
            locale: locale.clone(),
            freshness: check_locale(paths, locale),
        })
        .collect();

    FreshnessSummary { statuses }
}
