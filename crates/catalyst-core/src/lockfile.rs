use serde::{Deserialize, Serialize};
use std::path::Path;

use catalyst_util::errors::CatalystError;

use crate::package::PackageName;

/// File name of the lockfile written next to `catalyst.toml`.
pub const LOCKFILE_FILE: &str = "catalyst.lock";

/// Deterministic lockfile recording the exact resolved package versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lockfile {
    #[serde(default)]
    pub package: Vec<LockedPackage>,
}

/// A single locked package with its chosen version and the repository it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockedPackage {
    pub name: PackageName,
    /// The version label exactly as the repository published it.
    pub version: String,
    #[serde(default)]
    pub repository: Option<String>,
    /// Names of the packages this one requires.
    #[serde(default)]
    pub dependencies: Vec<PackageName>,
}

impl Lockfile {
    /// Load and parse a `catalyst.lock` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalystError::Generic {
            message: format!("Failed to read lockfile: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            CatalystError::Generic {
                message: format!("Failed to parse lockfile: {e}"),
            }
            .into()
        })
    }

    /// Serialize the lockfile to a pretty-printed TOML string.
    pub fn to_string_pretty(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Write the lockfile to `path`, replacing any previous content.
    pub fn write_to(&self, path: &Path) -> miette::Result<()> {
        let content = self.to_string_pretty().map_err(|e| CatalystError::Generic {
            message: format!("Failed to serialize lockfile: {e}"),
        })?;
        let header = "# This file is generated by catalyst. Do not edit it by hand.\n\n";
        std::fs::write(path, format!("{header}{content}")).map_err(CatalystError::Io)?;
        Ok(())
    }

    /// The locked version label of `name`, if present.
    pub fn locked_version(&self, name: &str) -> Option<&str> {
        self.package
            .iter()
            .find(|p| p.name.as_str() == name)
            .map(|p| p.version.as_str())
    }
}
