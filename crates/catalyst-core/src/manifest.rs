use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::package::PackageName;

/// File name of a Catalyst project manifest.
pub const MANIFEST_FILE: &str = "catalyst.toml";

/// The parsed representation of a `catalyst.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub package: PackageMetadata,

    /// Direct requirements, constraint strings keyed by package name.
    /// Declaration order is preserved.
    #[serde(default)]
    pub require: IndexMap<PackageName, String>,

    #[serde(default)]
    pub repositories: IndexMap<String, RepositoryEntry>,
}

/// Package identity and metadata from the `[package]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: PackageName,
    /// Required when the package is published through a directory repository.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
}

/// Backend kinds a repository descriptor may name.
///
/// Deserialization fails for any tag outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryKind {
    /// A JSON catalog document listing packages, versions and requirements.
    Catalog,
    /// A directory whose subdirectories are packages with their own `catalyst.toml`.
    Directory,
}

impl std::fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog => f.write_str("catalog"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

/// A repository reference, either a directory path or a detailed descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryEntry {
    Path(PathBuf),
    Detailed { kind: RepositoryKind, path: PathBuf },
}

impl RepositoryEntry {
    /// The backend kind; the shorthand form is a directory repository.
    pub fn kind(&self) -> RepositoryKind {
        match self {
            Self::Path(_) => RepositoryKind::Directory,
            Self::Detailed { kind, .. } => *kind,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Path(path) => path,
            Self::Detailed { path, .. } => path,
        }
    }
}

impl Manifest {
    /// Load and parse a `catalyst.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            catalyst_util::errors::CatalystError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::parse_toml(&content)
    }

    /// Parse a `catalyst.toml` from a string.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            catalyst_util::errors::CatalystError::Manifest {
                message: format!("Failed to parse catalyst.toml: {e}"),
            }
            .into()
        })
    }
}
