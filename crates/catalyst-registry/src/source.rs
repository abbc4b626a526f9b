//! Opening repository backends from descriptors.

use std::path::Path;

use catalyst_core::manifest::{RepositoryEntry, RepositoryKind};
use catalyst_resolver::repository::Repository;
use catalyst_util::errors::CatalystError;

use crate::catalog::CatalogRepository;
use crate::directory::DirectoryRepository;

/// Open the backend a descriptor names.
///
/// Relative paths are taken relative to `base_dir`, the directory of the
/// manifest or config file that declared the repository.
pub fn open(
    name: &str,
    entry: &RepositoryEntry,
    base_dir: &Path,
) -> Result<Box<dyn Repository>, CatalystError> {
    let path = catalyst_util::fs::resolve_relative(base_dir, entry.path());
    tracing::debug!("Opening {} repository `{name}` at {}", entry.kind(), path.display());

    let repository: Box<dyn Repository> = match entry.kind() {
        RepositoryKind::Catalog => Box::new(CatalogRepository::from_path(name, &path)?),
        RepositoryKind::Directory => Box::new(DirectoryRepository::open(name, &path)?),
    };
    Ok(repository)
}

/// Open every descriptor in order.
pub fn open_all<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a RepositoryEntry)>,
    base_dir: &Path,
) -> Result<Vec<Box<dyn Repository>>, CatalystError> {
    entries
        .into_iter()
        .map(|(name, entry)| open(name, entry, base_dir))
        .collect()
}
