use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Console output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Print the title banner before the first prompt
    #[serde(default = "default_true")]
    pub show_banner: bool,
    /// Width of the `=` and `-` rules around the banner and results
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_banner: default_true(),
            rule_width: default_rule_width(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_rule_width() -> usize {
    41
}

/// Loads a [`Config`] from a TOML file
pub struct ConfigFile {
    file_path: PathBuf,
}

impl ConfigFile {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Read and parse the file; a missing file yields the defaults
    pub fn load(&self) -> Result<Config> {
        if !self.file_path.exists() {
            tracing::info!(path = %self.file_path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("failed to read config {}", self.file_path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", self.file_path.display()))?;
        Ok(config)
    }
}
