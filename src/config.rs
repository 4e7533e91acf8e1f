// src/config.rs

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::ConfigError;

pub const DEFAULT_REPORTS_PATH: &str = "reports.json";
pub const DEFAULT_SUMMARY_PATH: &str = "summary.json";
pub const DEFAULT_OUTPUT_PATH: &str = "combined.csv";

/// Optional YAML file; every key may be omitted.
///
/// ```yaml
/// reports: data/Kauffman-reports.json
/// summary: data/Kauffman-summary.json
/// output: out/combined.csv
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub reports: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ConfigFile {
    /// Load a config file the user asked for by name. Unlike an implicit
    /// default location, a missing or broken file here is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let contents = contents.trim();
        if contents.is_empty() {
            tracing::debug!(path = %path.display(), "config file is empty, using defaults");
            return Ok(Self::default());
        }

        let parsed = serde_yaml::from_str(contents).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded configuration from file");
        Ok(parsed)
    }
}

/// Resolved input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub reports: PathBuf,
    pub summary: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reports: PathBuf::from(DEFAULT_REPORTS_PATH),
            summary: PathBuf::from(DEFAULT_SUMMARY_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Layer explicit values (CLI or env) over the config file, then over the
    /// built-in defaults.
    pub fn resolve(
        reports: Option<PathBuf>,
        summary: Option<PathBuf>,
        output: Option<PathBuf>,
        file: Option<ConfigFile>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            reports: reports.or(file.reports).unwrap_or(defaults.reports),
            summary: summary.or(file.summary).unwrap_or(defaults.summary),
            output: output.or(file.output).unwrap_or(defaults.output),
        }
    }
}
