//! Directory repositories: every immediate subdirectory holding a
//! `catalyst.toml` with a name and a version publishes one package version.

use std::path::{Path, PathBuf};

use catalyst_core::manifest::{Manifest, MANIFEST_FILE};
use catalyst_resolver::repository::{parse_requires, Candidate, Repository};
use catalyst_resolver::version::Version;
use catalyst_util::errors::CatalystError;
use indexmap::IndexMap;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
struct Published {
    candidate: Candidate,
    dir: PathBuf,
}

/// A scanned package directory. The scan happens once, when the repository is opened.
#[derive(Debug)]
pub struct DirectoryRepository {
    name: String,
    packages: IndexMap<String, Vec<Published>>,
}

impl DirectoryRepository {
    /// Scan `root` and index every package found in its subdirectories.
    pub fn open(name: impl Into<String>, root: &Path) -> Result<Self, CatalystError> {
        let name = name.into();
        if !root.is_dir() {
            return Err(CatalystError::Repository {
                message: format!(
                    "Directory repository `{name}` does not exist: {}",
                    root.display()
                ),
            });
        }

        let mut packages: IndexMap<String, Vec<Published>> = IndexMap::new();
        for dir in catalyst_util::fs::sorted_subdirs(root)? {
            let manifest_path = dir.join(MANIFEST_FILE);
            if !manifest_path.is_file() {
                continue;
            }
            let Some(candidate) = read_candidate(&manifest_path) else {
                continue;
            };
            debug!(
                "{name}: found {} {} in {}",
                candidate.name,
                candidate.version,
                dir.display()
            );
            packages
                .entry(candidate.name.to_string())
                .or_default()
                .push(Published { candidate, dir });
        }

        Ok(Self {
            name,
            packages,
        })
    }
}

/// The candidate a package manifest publishes, or `None` (with a warning) if it can't publish one.
fn read_candidate(manifest_path: &Path) -> Option<Candidate> {
    let manifest = match Manifest::from_path(manifest_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            warn!("Skipping {}: {e}", manifest_path.display());
            return None;
        }
    };
    let Some(version) = manifest.package.version.as_deref() else {
        warn!(
            "Skipping {}: package {} declares no version",
            manifest_path.display(),
            manifest.package.name
        );
        return None;
    };
    let requires = match parse_requires(manifest.require.clone()) {
        Ok(requires) => requires,
        Err(e) => {
            warn!("Skipping {}: {e}", manifest_path.display());
            return None;
        }
    };
    Some(Candidate {
        name: manifest.package.name.clone(),
        version: Version::parse(version),
        requires,
    })
}

impl Repository for DirectoryRepository {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_package(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    fn list_candidates(&self, name: &str) -> Vec<Candidate> {
        self.packages
            .get(name)
            .map(|published| published.iter().map(|p| p.candidate.clone()).collect())
            .unwrap_or_default()
    }

    fn locate(&self, name: &str, version: &str) -> Option<String> {
        self.packages
            .get(name)?
            .iter()
            .find(|p| p.candidate.version.as_str() == version)
            .map(|p| p.dir.display().to_string())
    }
}
