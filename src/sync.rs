//! Check-then-rebuild pipeline.
//!
//! 1. **Check**: classify every target locale (see [`crate::freshness`]).
//! 2. **Rebuild**: if anything is stale, run the regenerator exactly once for all locales.
//!
//! A missing XLIFF file stops the pipeline before the rebuild; the caller decides how to exit.

use anyhow::Result;

use crate::{
    config::Config,
    freshness::{FreshnessSummary, LocalePaths, check_all},
    rebuild::{RebuildOutcome, Regenerator, rebuild},
};

#[derive(Debug)]
pub enum SyncOutcome {
    /// The XLIFF file for `locale` is absent. Nothing was rebuilt.
    MissingSource {
        locale: String,
        summary: FreshnessSummary,
    },
    /// All sources present. `rebuild` is `None` when everything was already current.
    Checked {
        summary: FreshnessSummary,
        rebuild: Option<RebuildOutcome>,
    },
}

pub struct LocaleSync<'a> {
    config: &'a Config,
    paths: LocalePaths,
    force: bool,
}

impl<'a> LocaleSync<'a> {
    pub fn new(config: &'a Config, paths: LocalePaths) -> Self {
        Self {
            config,
            paths,
            force: false,
        }
    }

    /// Rebuild even when every locale is up-to-date.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn paths(&self) -> &LocalePaths {
        &self.paths
    }

    pub fn check(&self) -> FreshnessSummary {
        check_all(&self.config.target_locales, &self.paths)
    }

    pub fn run(&self, regenerator: &dyn Regenerator) -> Result<SyncOutcome> {
        let summary = self.check();

        if let Some(locale) = summary.first_missing_source() {
            return Ok(SyncOutcome::MissingSource {
                locale: locale.to_string(),
                summary,
            });
        }

        let rebuild = if self.force || summary.needs_rebuild() {
            Some(rebuild(regenerator)?)
        } else {
            None
        };

        Ok(SyncOutcome::Checked { summary, rebuild })
    }
}
