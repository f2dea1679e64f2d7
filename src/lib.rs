//! locale-sync - keep lit-localize translation modules in step with their XLIFF files
//!
//! `locale-sync` is a build-time CLI tool and library. It checks whether the
//! generated per-locale modules are newer than their XLIFF sources, runs the
//! regeneration command when they are not, and condenses the flood of
//! missing-translation warnings into one line per locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, console output, exit status)
//! - `config`: `lit-localize.json` loading and parsing
//! - `freshness`: Per-locale staleness detection
//! - `rebuild`: Regeneration command and warning tally
//! - `sync`: Check-then-rebuild pipeline

pub mod cli;
pub mod config;
pub mod freshness;
pub mod rebuild;
pub mod sync;
