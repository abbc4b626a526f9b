use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use catalyst_util::errors::CatalystError;

use crate::manifest::RepositoryEntry;

/// Default ceiling on resolver passes before resolution is abandoned.
pub const DEFAULT_MAX_PASSES: usize = 64;

/// Environment variable overriding the Catalyst data directory.
pub const HOME_ENV: &str = "CATALYST_HOME";

/// Global user configuration loaded from `~/.catalyst/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Repositories registered for every project, ahead of project repositories.
    /// Relative paths are resolved against the configuration directory.
    #[serde(default)]
    pub repositories: IndexMap<String, RepositoryEntry>,
}

/// Resolver settings from `[resolver]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_max_passes", rename = "max-passes")]
    pub max_passes: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_passes: default_max_passes(),
        }
    }
}

fn default_max_passes() -> usize {
    DEFAULT_MAX_PASSES
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load a configuration file from an explicit path, or defaults if it is absent.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!("no global config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| CatalystError::Generic {
            message: format!("Failed to read global config: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            CatalystError::Generic {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the Catalyst data directory (`$CATALYST_HOME` or `~/.catalyst/`).
pub fn dirs_path() -> PathBuf {
    if let Ok(home) = std::env::var(HOME_ENV) {
        return PathBuf::from(home);
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".catalyst")
}
