//! The capability interface the resolver consumes.
//!
//! Backends (static catalogs, scanned package directories, ...) implement
//! [`Repository`]; the resolver only ever reads from them.

use std::fmt;

use catalyst_core::package::PackageName;
use catalyst_util::errors::CatalystError;
use indexmap::IndexMap;

use crate::constraint::Constraint;
use crate::version::Version;

/// Requirements of one package version, in declaration order.
pub type RequiresMap = IndexMap<PackageName, Constraint>;

/// One published version of one package.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: PackageName,
    pub version: Version,
    pub requires: RequiresMap,
}

/// A queryable source of package candidates.
pub trait Repository: fmt::Debug + Send + Sync {
    /// Name used in diagnostics and lockfiles.
    fn name(&self) -> &str;

    fn has_package(&self, name: &str) -> bool;

    /// Every published version of `name`, in publication order.
    /// Empty when the repository does not know the package.
    fn list_candidates(&self, name: &str) -> Vec<Candidate>;

    /// Requirements of an exact `(name, version)` pair.
    fn get_requires(&self, name: &str, version: &str) -> Result<RequiresMap, CatalystError> {
        self.list_candidates(name)
            .into_iter()
            .find(|candidate| candidate.version.as_str() == version)
            .map(|candidate| candidate.requires)
            .ok_or_else(|| CatalystError::version_not_found(name, version))
    }

    /// Where the content of a package version lives, if the backend knows.
    fn locate(&self, _name: &str, _version: &str) -> Option<String> {
        None
    }
}

/// Parse raw `name -> constraint` pairs into a [`RequiresMap`].
pub fn parse_requires<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Result<RequiresMap, CatalystError>
where
    K: Into<PackageName>,
    V: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(name, constraint)| Ok((name.into(), Constraint::parse(constraint.as_ref())?)))
        .collect()
}
