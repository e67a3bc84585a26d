use crate::{Error, Result};
use fpi2nite_index::IndexConfig;
use fpi2nite_streams::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Look-back used when neither the command line nor the config names one
pub const DEFAULT_NDAYS: u32 = 7;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FPI2NITE_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`~/.config/fpi2nite/config.toml` on Linux)
/// 4. ~/.fpi2nite/config.toml (fallback for systems without one)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("FPI2NITE_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("fpi2nite").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".fpi2nite").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default = "default_ndays")]
    pub ndays: u32,
    #[serde(default)]
    pub on_malformed: FailurePolicy,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            ndays: DEFAULT_NDAYS,
            on_malformed: FailurePolicy::default(),
        }
    }
}

fn default_ndays() -> u32 {
    DEFAULT_NDAYS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
}

impl Config {
    /// Load from `explicit_path` or the default location; a missing file yields defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
