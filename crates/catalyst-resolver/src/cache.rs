//! Resolution session cache for avoiding redundant repository lookups.
//!
//! Candidate lists are gathered once per package name per resolution; the
//! cache lives and dies with a single solve.

use std::collections::{HashMap, HashSet};

use catalyst_core::package::PackageName;
use catalyst_util::errors::CatalystError;

use crate::repository::{Candidate, Repository};

/// A candidate together with the repository that advertised it.
#[derive(Debug, Clone)]
pub struct Offer {
    pub repository: String,
    pub candidate: Candidate,
}

/// Union of the candidates every repository advertises for `name`.
///
/// Repositories are visited in registration order and a label already seen
/// in an earlier repository is skipped. Fails with `PackageNotFound` when no
/// repository has the package at all.
pub fn collect_offers(
    repositories: &[&dyn Repository],
    name: &PackageName,
) -> Result<Vec<Offer>, CatalystError> {
    let mut seen = HashSet::new();
    let mut offers = Vec::new();
    let mut known = false;

    for repository in repositories {
        if !repository.has_package(name.as_str()) {
            continue;
        }
        known = true;
        for candidate in repository.list_candidates(name.as_str()) {
            if seen.insert(candidate.version.as_str().to_string()) {
                offers.push(Offer {
                    repository: repository.name().to_string(),
                    candidate,
                });
            } else {
                tracing::trace!(
                    "{name} {} from {} shadowed by an earlier repository",
                    candidate.version,
                    repository.name()
                );
            }
        }
    }

    if !known {
        return Err(CatalystError::package_not_found(name.as_str()));
    }
    Ok(offers)
}

/// Per-resolution memo of [`collect_offers`].
pub struct CandidateCache<'a> {
    repositories: &'a [&'a dyn Repository],
    offers: HashMap<PackageName, Vec<Offer>>,
}

impl<'a> CandidateCache<'a> {
    pub fn new(repositories: &'a [&'a dyn Repository]) -> Self {
        Self {
            repositories,
            offers: HashMap::new(),
        }
    }

    /// Offers for `name`, querying the repositories on first use.
    pub fn offers(&mut self, name: &PackageName) -> Result<&[Offer], CatalystError> {
        if !self.offers.contains_key(name) {
            let offers = collect_offers(self.repositories, name)?;
            tracing::trace!("{name}: {} candidate(s)", offers.len());
            self.offers.insert(name.clone(), offers);
        }
        Ok(&self.offers[name])
    }
}
