//! The package service: a list of registered repositories plus the
//! operations that query them and solve projects against them.

use std::path::{Path, PathBuf};

use catalyst_core::config::GlobalConfig;
use catalyst_core::manifest::RepositoryEntry;
use catalyst_core::package::PackageName;
use catalyst_registry::source;
use catalyst_resolver::repository::{Repository, RequiresMap};
use catalyst_resolver::resolver::{self, Resolution, ResolverOptions};
use catalyst_util::errors::CatalystError;
use tracing::debug;

use crate::project::Project;

/// One published package version, as found in a specific repository.
#[derive(Debug, Clone)]
pub struct PackageRecord {
    pub name: PackageName,
    pub version: String,
    pub repository: String,
    /// Where the content lives: a source URL or a package directory.
    pub location: Option<String>,
    pub requires: RequiresMap,
}

/// Repositories registered for lookups and resolution, in registration order.
#[derive(Debug, Default)]
pub struct PackageService {
    repositories: Vec<Box<dyn Repository>>,
    options: ResolverOptions,
}

impl PackageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        Self {
            repositories: Vec::new(),
            options,
        }
    }

    /// A service set up from the global configuration: resolver options plus
    /// every repository it declares, relative paths taken from `config_dir`.
    pub fn from_config(config: &GlobalConfig, config_dir: &Path) -> Result<Self, CatalystError> {
        let mut service = Self::with_options(ResolverOptions::from(&config.resolver));
        let repositories = source::open_all(
            config
                .repositories
                .iter()
                .map(|(name, entry)| (name.as_str(), entry)),
            config_dir,
        )?;
        for repository in repositories {
            service.add_repository(repository);
        }
        Ok(service)
    }

    pub fn add_repository(&mut self, repository: Box<dyn Repository>) {
        debug!("Registered repository `{}`", repository.name());
        self.repositories.push(repository);
    }

    /// Register a directory repository named after its path.
    pub fn add_directory(&mut self, dir: PathBuf) -> Result<(), CatalystError> {
        let name = dir.display().to_string();
        let entry = RepositoryEntry::Path(dir);
        let repository = source::open(&name, &entry, Path::new("."))?;
        self.add_repository(repository);
        Ok(())
    }

    pub fn clear_repositories(&mut self) {
        self.repositories.clear();
    }

    pub fn repositories(&self) -> impl Iterator<Item = &dyn Repository> {
        self.repositories.iter().map(|r| r.as_ref())
    }

    /// The first registered repository publishing the exact `(name, version)` pair.
    pub fn get_package(&self, name: &str, version: &str) -> Result<PackageRecord, CatalystError> {
        for repository in self.repositories() {
            let Some(candidate) = repository
                .list_candidates(name)
                .into_iter()
                .find(|c| c.version.as_str() == version)
            else {
                continue;
            };
            return Ok(PackageRecord {
                name: candidate.name,
                version: version.to_string(),
                repository: repository.name().to_string(),
                location: repository.locate(name, version),
                requires: candidate.requires,
            });
        }
        Err(CatalystError::version_not_found(name, version))
    }

    /// Requirements of an exact `(name, version)` pair, from the first
    /// registered repository that answers for it.
    pub fn get_package_dependencies(
        &self,
        name: &str,
        version: &str,
    ) -> Result<RequiresMap, CatalystError> {
        self.repositories()
            .find_map(|repository| repository.get_requires(name, version).ok())
            .ok_or_else(|| CatalystError::version_not_found(name, version))
    }

    pub fn package_exists(&self, name: &str, version: &str) -> bool {
        self.repositories().any(|repository| {
            repository
                .list_candidates(name)
                .iter()
                .any(|c| c.version.as_str() == version)
        })
    }

    /// Solve `project` against the registered repositories followed by the
    /// project's own.
    pub fn solve_dependencies(&self, project: &dyn Project) -> Result<Resolution, CatalystError> {
        let root = project.require()?;
        let declared = project.repositories();
        let project_repositories = source::open_all(
            declared.iter().map(|(name, entry)| (name.as_str(), entry)),
            project.root_dir(),
        )?;

        let repositories: Vec<&dyn Repository> = self
            .repositories()
            .chain(project_repositories.iter().map(|r| r.as_ref()))
            .collect();
        debug!(
            "Solving {} requirements against {} repositories",
            root.len(),
            repositories.len()
        );
        resolver::solve(&root, &repositories, &self.options)
    }
}
