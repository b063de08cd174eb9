use std::{fs, io, path::Path, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::cli::{Cli, Side};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ai: Option<Side>,
    pub seed: Option<u64>,
    pub ascii: bool,
}

impl Config {
    /// Defaults, overlaid with the YAML file at `path` when it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Command-line flags win over file values.
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if cli.ai.is_some() {
            self.ai = cli.ai;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        self.ascii |= cli.ascii;
        self
    }
}
