use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "lit-localize.json";

/// Characters that must not appear in a locale id, since it is spliced into file names.
const FORBIDDEN_LOCALE_CHARS: &[char] = &['/', '\\'];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub source_locale: Option<String>,
    pub target_locales: Vec<String>,
    #[serde(default)]
    pub interchange: Interchange,
    #[serde(default)]
    pub output: Output,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interchange {
    #[serde(default = "default_xliff_dir")]
    pub xliff_dir: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_xliff_dir() -> String {
    "./xliff".to_string()
}

fn default_output_dir() -> String {
    "./src/locales".to_string()
}

impl Default for Interchange {
    fn default() -> Self {
        Self {
            xliff_dir: default_xliff_dir(),
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a target locale is empty or contains a path separator.
    pub fn validate(&self) -> Result<()> {
        for locale in &self.target_locales {
            if locale.trim().is_empty() {
                bail!("Empty locale in 'targetLocales'");
            }
            if locale.contains(FORBIDDEN_LOCALE_CHARS) {
                bail!("Invalid locale in 'targetLocales': \"{}\"", locale);
            }
        }
        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the configuration was read from.
    pub path: PathBuf,
}

impl ConfigLoadResult {
    /// Directory that relative paths in the configuration are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn xliff_dir(&self) -> PathBuf {
        self.base_dir().join(&self.config.interchange.xliff_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base_dir().join(&self.config.output.output_dir)
    }
}

pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(ConfigLoadResult {
        config,
        path: path.to_path_buf(),
    })
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => bail!(
            "Could not find {} in {} or any parent directory",
            CONFIG_FILE_NAME,
            start_dir.display()
        ),
    }
}
