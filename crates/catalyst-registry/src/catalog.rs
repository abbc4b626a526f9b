//! Catalog repositories: a fixed table of packages, versions and requirements.

use std::path::Path;

use catalyst_core::package::PackageName;
use catalyst_resolver::repository::{parse_requires, Candidate, Repository, RequiresMap};
use catalyst_resolver::version::Version;
use catalyst_util::errors::CatalystError;
use indexmap::IndexMap;
use serde::Deserialize;

/// One package entry of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogPackage {
    #[serde(default)]
    source: String,
    /// Version label to `{ dependency: constraint }`, in publication order.
    #[serde(default)]
    versions: IndexMap<String, IndexMap<String, String>>,
}

#[derive(Debug, Default)]
struct CatalogEntry {
    source: Option<String>,
    candidates: Vec<Candidate>,
}

/// An in-memory catalog, built programmatically or loaded from JSON.
#[derive(Debug)]
pub struct CatalogRepository {
    name: String,
    packages: IndexMap<String, CatalogEntry>,
}

impl CatalogRepository {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            packages: IndexMap::new(),
        }
    }

    /// Parse a catalog document.
    ///
    /// Every constraint is parsed up front, so a malformed one fails the load.
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, CatalystError> {
        let name = name.into();
        let document: IndexMap<String, CatalogPackage> =
            serde_json::from_str(json).map_err(|e| CatalystError::Repository {
                message: format!("Failed to parse catalog `{name}`: {e}"),
            })?;

        let mut catalog = Self::new(name);
        for (package, entry) in document {
            if !entry.source.is_empty() {
                catalog.set_source(&package, &entry.source);
            }
            for (version, requires) in entry.versions {
                let requires = parse_requires(requires)?;
                catalog.add_version(&package, &version, requires);
            }
        }
        tracing::debug!(
            "Loaded catalog `{}` with {} packages",
            catalog.name,
            catalog.packages.len()
        );
        Ok(catalog)
    }

    /// Read and parse a catalog document from disk.
    pub fn from_path(name: impl Into<String>, path: &Path) -> Result<Self, CatalystError> {
        let name = name.into();
        let json = std::fs::read_to_string(path).map_err(|e| CatalystError::Repository {
            message: format!("Failed to read catalog `{name}` at {}: {e}", path.display()),
        })?;
        Self::from_json(name, &json)
    }

    /// Publish `version` of `package`. Re-publishing a label replaces it.
    pub fn add_version(&mut self, package: &str, version: &str, requires: RequiresMap) -> &mut Self {
        let entry = self.packages.entry(package.to_string()).or_default();
        let candidate = Candidate {
            name: PackageName::from(package),
            version: Version::parse(version),
            requires,
        };
        match entry
            .candidates
            .iter_mut()
            .find(|c| c.version.as_str() == version)
        {
            Some(existing) => *existing = candidate,
            None => entry.candidates.push(candidate),
        }
        self
    }

    /// Record where the content of `package` is fetched from.
    pub fn set_source(&mut self, package: &str, source: &str) -> &mut Self {
        self.packages.entry(package.to_string()).or_default().source = Some(source.to_string());
        self
    }
}

impl Repository for CatalogRepository {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_package(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    fn list_candidates(&self, name: &str) -> Vec<Candidate> {
        self.packages
            .get(name)
            .map(|entry| entry.candidates.clone())
            .unwrap_or_default()
    }

    fn locate(&self, name: &str, version: &str) -> Option<String> {
        let entry = self.packages.get(name)?;
        entry
            .candidates
            .iter()
            .any(|c| c.version.as_str() == version)
            .then(|| entry.source.clone())
            .flatten()
    }
}
