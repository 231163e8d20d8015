use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::pruner::{JunkRules, DEFAULT_CONCURRENCY};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pruner: PrunerConfig,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrunerConfig {
    /// Number of concurrent workers
    pub concurrency: usize,
    /// Report matches without deleting them
    pub dry_run: bool,
}

/// Additions to the built-in junk table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Extra directory names to remove
    pub extra_dirs: Vec<String>,
    /// Extra file names to remove
    pub extra_files: Vec<String>,
    /// Extra extensions to remove (leading dot optional)
    pub extra_extensions: Vec<String>,
    /// Names that are never removed
    pub keep: Vec<String>,
}

impl Default for PrunerConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            dry_run: false,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the file in the
    /// user config directory is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `<config dir>/node-pruner/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("node-pruner").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pruner.concurrency == 0 {
            return Err(ConfigError::Invalid(
                "pruner.concurrency must be greater than 0".to_string(),
            ));
        }

        let blank = |names: &[String]| names.iter().any(|n| n.trim().is_empty());
        if blank(&self.rules.extra_dirs)
            || blank(&self.rules.extra_files)
            || blank(&self.rules.extra_extensions)
            || blank(&self.rules.keep)
        {
            return Err(ConfigError::Invalid(
                "rule names must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the junk table: built-in rules plus configured additions.
    pub fn junk_rules(&self) -> JunkRules {
        JunkRules::builtin()
            .with_dirs(self.rules.extra_dirs.iter().cloned())
            .with_files(self.rules.extra_files.iter().cloned())
            .with_extensions(self.rules.extra_extensions.iter().cloned())
            .with_keep(self.rules.keep.iter().cloned())
    }
}
