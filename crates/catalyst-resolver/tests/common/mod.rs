#![allow(dead_code)]

use catalyst_core::package::PackageName;
use catalyst_resolver::repository::{parse_requires, Candidate, Repository, RequiresMap};
use catalyst_resolver::resolver::{solve, Resolution, ResolverOptions};
use catalyst_resolver::version::Version;
use catalyst_util::errors::CatalystError;
use indexmap::IndexMap;

/// In-memory repository for resolver tests.
#[derive(Debug)]
pub struct MemoryRepository {
    name: String,
    packages: IndexMap<String, Vec<Candidate>>,
}

impl MemoryRepository {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            packages: IndexMap::new(),
        }
    }

    pub fn with(mut self, package: &str, version: &str, requires: &[(&str, &str)]) -> Self {
        self.packages
            .entry(package.to_string())
            .or_default()
            .push(Candidate {
                name: PackageName::from(package),
                version: Version::parse(version),
                requires: parse_requires(requires.iter().copied()).unwrap(),
            });
        self
    }
}

impl Repository for MemoryRepository {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_package(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    fn list_candidates(&self, name: &str) -> Vec<Candidate> {
        self.packages.get(name).cloned().unwrap_or_default()
    }
}

/// The catalog shared by most resolver scenarios.
pub fn simple_repository() -> MemoryRepository {
    let mut repo = MemoryRepository::new("simple");
    for version in [
        "v1.0.0", "1.0.1", "v1.0.2", "v1.1.2", "1.430.429", "2.0.0", "2.0.2", "dev",
    ] {
        repo = repo.with("dukesoft/test-package", version, &[]);
    }
    for version in ["0.0.1", "0.1.0", "1.0.0", "1.2.0", "1.2.1", "1.5.1", "2.0.0"] {
        repo = repo.with("dukesoft/anotherpackage", version, &[]);
    }
    repo.with(
        "othervendor/nesting-package",
        "1.1.1",
        &[("dukesoft/anotherpackage", "0.1.0")],
    )
    .with(
        "othervendor/nesting-package",
        "1.3.2",
        &[("othervendor/test-package", "^1.0")],
    )
    .with(
        "othervendor/test-package",
        "1.0.1",
        &[("dukesoft/anotherpackage", "0.1.0")],
    )
    .with(
        "othervendor/test-package",
        "v1.0.2",
        &[("dukesoft/anotherpackage", "^1.0")],
    )
    .with(
        "othervendor/another-package",
        "1.0.1",
        &[("dukesoft/anotherpackage", "<1.2.1")],
    )
    .with(
        "othervendor/package-requiring-latest-test",
        "1.0.0",
        &[("dukesoft/test-package", ">=2")],
    )
    .with(
        "othervendor/package-requiring-early-test",
        "1.0.0",
        &[("dukesoft/test-package", "1.0.1")],
    )
}

pub fn requires(entries: &[(&str, &str)]) -> RequiresMap {
    parse_requires(entries.iter().copied()).unwrap()
}

pub fn resolve(
    repositories: &[&dyn Repository],
    root: &[(&str, &str)],
) -> Result<Resolution, CatalystError> {
    solve(&requires(root), repositories, &ResolverOptions::default())
}

/// `(name, version)` pairs in resolution order.
pub fn pairs(resolution: &Resolution) -> Vec<(String, String)> {
    resolution
        .versions()
        .into_iter()
        .map(|(name, version)| (name.to_string(), version))
        .collect()
}

pub fn expected(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect()
}
