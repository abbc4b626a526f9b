//! What the package service needs to know about a project.

use std::path::Path;

use catalyst_core::manifest::RepositoryEntry;
use catalyst_core::project::LocalProject;
use catalyst_resolver::repository::{parse_requires, RequiresMap};
use catalyst_util::errors::CatalystError;

/// A project whose dependencies can be solved.
pub trait Project {
    /// Direct requirements with every constraint parsed. A malformed constraint is fatal.
    fn require(&self) -> Result<RequiresMap, CatalystError>;

    /// Repository descriptors the project declares, in declaration order.
    fn repositories(&self) -> Vec<(String, RepositoryEntry)>;

    /// Directory that relative repository paths are resolved against.
    fn root_dir(&self) -> &Path;
}

impl Project for LocalProject {
    fn require(&self) -> Result<RequiresMap, CatalystError> {
        parse_requires(self.manifest.require.clone())
    }

    fn repositories(&self) -> Vec<(String, RepositoryEntry)> {
        self.manifest
            .repositories
            .iter()
            .map(|(name, entry)| (name.clone(), entry.clone()))
            .collect()
    }

    fn root_dir(&self) -> &Path {
        &self.root_dir
    }
}
