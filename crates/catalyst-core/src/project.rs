use std::path::{Path, PathBuf};

use crate::manifest::{Manifest, MANIFEST_FILE};
use crate::package::PackageName;

/// A project on disk: one `catalyst.toml` manifest plus the directory holding it.
#[derive(Debug, Clone)]
pub struct LocalProject {
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
    pub root_dir: PathBuf,
}

impl LocalProject {
    /// Load the project whose manifest lives directly in `root_dir`.
    pub fn load(root_dir: &Path) -> miette::Result<Self> {
        let manifest_path = root_dir.join(MANIFEST_FILE);
        let manifest = Manifest::from_path(&manifest_path)?;
        Ok(Self {
            manifest,
            manifest_path,
            root_dir: root_dir.to_path_buf(),
        })
    }

    /// Find the nearest project at or above `start` and load it.
    pub fn discover(start: &Path) -> miette::Result<Self> {
        let root = catalyst_util::fs::find_ancestor_with(start, MANIFEST_FILE).ok_or_else(|| {
            catalyst_util::errors::CatalystError::Manifest {
                message: format!("Could not find {MANIFEST_FILE} in {} or any parent", start.display()),
            }
        })?;
        Self::load(&root)
    }

    /// Returns the package name from the manifest.
    pub fn name(&self) -> &PackageName {
        &self.manifest.package.name
    }

    /// Returns the package version from the manifest, if declared.
    pub fn version(&self) -> Option<&str> {
        self.manifest.package.version.as_deref()
    }

    /// Path of the lockfile belonging to this project.
    pub fn lockfile_path(&self) -> PathBuf {
        self.root_dir.join(crate::lockfile::LOCKFILE_FILE)
    }
}
