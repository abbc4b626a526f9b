//! Core dependency resolution algorithm: an iterative fixpoint over passes.
//!
//! Each pass recomputes, for every known package name, the intersection of the
//! constraints placed on it by the root and by every package currently chosen,
//! then picks the highest candidate satisfying it. When a package's choice
//! changes, its outgoing requirements are replaced by the new version's, which
//! can tighten or relax other packages on the next pass. Resolution ends on the
//! first pass that changes nothing. There is no backtracking: a constraint set
//! that no candidate satisfies is a hard failure.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use catalyst_core::config::{ResolverConfig, DEFAULT_MAX_PASSES};
use catalyst_core::package::PackageName;
use catalyst_util::errors::CatalystError;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::cache::{CandidateCache, Offer};
use crate::conflict::{ConflictingRequirement, ConstraintConflict, Revision};
use crate::constraint::Constraint;
use crate::repository::{Repository, RequiresMap};
use crate::version::Version;

/// Tunables for a single resolution.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Passes allowed before the resolution is abandoned as non-terminating.
    pub max_passes: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

impl From<&ResolverConfig> for ResolverOptions {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            max_passes: config.max_passes,
        }
    }
}

/// The source of a requirement edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Requirer {
    /// The project being resolved.
    Root,
    Package(PackageName),
}

impl fmt::Display for Requirer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::Package(name) => write!(f, "{name}"),
        }
    }
}

/// A package with its chosen version.
#[derive(Debug, Clone)]
pub struct ResolvedPackage {
    pub name: PackageName,
    pub version: Version,
    /// Name of the repository that advertised the chosen version.
    pub repository: String,
    /// Requirements declared by the chosen version.
    pub requires: RequiresMap,
    /// Everything that constrains this package in the final assignment.
    pub required_by: Vec<Requirer>,
    /// Intersection of those constraints.
    pub constraint: Constraint,
}

/// The output of dependency resolution.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The root requirements the resolution started from.
    pub root: RequiresMap,
    /// Root requirements first in declared order, then packages in discovery order.
    pub packages: IndexMap<PackageName, ResolvedPackage>,
    /// Selections that changed after they were first made.
    pub revisions: Vec<Revision>,
    pub passes: usize,
}

impl Resolution {
    /// Flat `name -> version label` mapping, labels exactly as published.
    pub fn versions(&self) -> IndexMap<PackageName, String> {
        self.packages
            .iter()
            .map(|(name, pkg)| (name.clone(), pkg.version.as_str().to_string()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedPackage> {
        self.packages.get(name)
    }

    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|pkg| pkg.version.as_str())
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Resolve `root` against `repositories` (in registration order).
///
/// Fails with `PackageNotFound` if a required name is unknown to every
/// repository, `Unresolveable` if a package's accumulated constraint excludes
/// every candidate, and `ResolutionLimit` if no fixpoint is reached within
/// `options.max_passes` passes.
pub fn solve(
    root: &RequiresMap,
    repositories: &[&dyn Repository],
    options: &ResolverOptions,
) -> Result<Resolution, CatalystError> {
    let mut state = ResolutionState::new(root, repositories);
    let mut passes = 0;

    loop {
        if passes == options.max_passes {
            return Err(CatalystError::ResolutionLimit {
                passes: options.max_passes,
            });
        }
        passes += 1;
        let changed = state.run_pass(passes)?;
        debug!(
            pass = passes,
            changed,
            resolved = state.resolved.len(),
            "resolver pass finished"
        );
        if !changed {
            break;
        }
    }

    Ok(state.finish(root, passes))
}

/// Everything a single solve knows. Never outlives the call.
struct ResolutionState<'a> {
    cache: CandidateCache<'a>,
    /// Outgoing requirements per requirer. Replaced, never merged, on reselection.
    edges: IndexMap<Requirer, RequiresMap>,
    /// Every name ever targeted by an edge, in first-discovery order.
    discovered: IndexSet<PackageName>,
    resolved: IndexMap<PackageName, Offer>,
    revisions: Vec<Revision>,
}

impl<'a> ResolutionState<'a> {
    fn new(root: &RequiresMap, repositories: &'a [&'a dyn Repository]) -> Self {
        let mut edges = IndexMap::new();
        edges.insert(Requirer::Root, root.clone());
        Self {
            cache: CandidateCache::new(repositories),
            edges,
            discovered: root.keys().cloned().collect(),
            resolved: IndexMap::new(),
            revisions: Vec::new(),
        }
    }

    /// One full re-evaluation of every known name. Returns whether anything changed.
    fn run_pass(&mut self, pass: usize) -> Result<bool, CatalystError> {
        let mut changed = false;
        let mut index = 0;

        // Names discovered during the pass are appended and visited in the same pass.
        while index < self.discovered.len() {
            let name = self.discovered[index].clone();
            index += 1;

            let contributions = self.contributions(&name);
            let Some(constraint) = Constraint::intersect_all(contributions.iter().map(|(_, c)| c))
            else {
                if self.resolved.shift_remove(&name).is_some() {
                    debug!("{name} is no longer required");
                    changed = true;
                }
                continue;
            };

            let offers = self.cache.offers(&name)?;
            let best = offers
                .iter()
                .filter(|offer| constraint.is_satisfied_by(&offer.candidate.version))
                .fold(None::<&Offer>, |best, offer| match best {
                    Some(b) if b.candidate.version >= offer.candidate.version => Some(b),
                    _ => Some(offer),
                });

            let Some(best) = best else {
                let conflict = ConstraintConflict {
                    package: name.clone(),
                    requirements: contributions
                        .into_iter()
                        .map(|(requirer, constraint)| ConflictingRequirement {
                            requirer: describe(&self.resolved, &requirer),
                            constraint,
                        })
                        .collect(),
                    available: offers
                        .iter()
                        .map(|offer| offer.candidate.version.to_string())
                        .collect(),
                };
                return Err(conflict.into_error());
            };
            let best = best.clone();

            let previous = self
                .resolved
                .get(&name)
                .map(|offer| offer.candidate.version.as_str().to_string());
            if previous.as_deref() == Some(best.candidate.version.as_str()) {
                continue;
            }

            match previous {
                Some(from) => {
                    debug!("{name}: {from} -> {} (`{constraint}`)", best.candidate.version);
                    self.revisions.push(Revision {
                        package: name.clone(),
                        from,
                        to: best.candidate.version.to_string(),
                        pass,
                    });
                }
                None => trace!("{name}: selected {} (`{constraint}`)", best.candidate.version),
            }

            for target in best.candidate.requires.keys() {
                self.discovered.insert(target.clone());
            }
            self.edges.insert(
                Requirer::Package(name.clone()),
                best.candidate.requires.clone(),
            );
            self.resolved.insert(name, best);
            changed = true;
        }

        if self.prune_unreachable() {
            changed = true;
        }
        Ok(changed)
    }

    /// Constraints on `name` from the root and from currently chosen packages.
    fn contributions(&self, name: &PackageName) -> Vec<(Requirer, Constraint)> {
        self.edges
            .iter()
            .filter(|(requirer, _)| match requirer {
                Requirer::Root => true,
                Requirer::Package(source) => self.resolved.contains_key(source),
            })
            .filter_map(|(requirer, requires)| {
                requires
                    .get(name)
                    .map(|constraint| (requirer.clone(), constraint.clone()))
            })
            .collect()
    }

    /// Drop chosen packages no longer reachable from the root. Returns whether any were dropped.
    fn prune_unreachable(&mut self) -> bool {
        let mut reachable: HashSet<PackageName> = HashSet::new();
        let mut queue: VecDeque<&PackageName> = self
            .edges
            .get(&Requirer::Root)
            .into_iter()
            .flat_map(|requires| requires.keys())
            .collect();

        while let Some(name) = queue.pop_front() {
            if !reachable.insert(name.clone()) || !self.resolved.contains_key(name) {
                continue;
            }
            if let Some(requires) = self.edges.get(&Requirer::Package(name.clone())) {
                queue.extend(requires.keys());
            }
        }

        let before = self.resolved.len();
        self.resolved.retain(|name, _| {
            let keep = reachable.contains(name);
            if !keep {
                debug!("{name} is unreachable from the root");
            }
            keep
        });
        before != self.resolved.len()
    }

    fn finish(self, root: &RequiresMap, passes: usize) -> Resolution {
        let mut packages = IndexMap::new();
        for name in &self.discovered {
            let Some(offer) = self.resolved.get(name) else {
                continue;
            };
            let contributions = self.contributions(name);
            let constraint = Constraint::intersect_all(contributions.iter().map(|(_, c)| c))
                .unwrap_or_else(Constraint::any);
            packages.insert(
                name.clone(),
                ResolvedPackage {
                    name: name.clone(),
                    version: offer.candidate.version.clone(),
                    repository: offer.repository.clone(),
                    requires: offer.candidate.requires.clone(),
                    required_by: contributions.into_iter().map(|(r, _)| r).collect(),
                    constraint,
                },
            );
        }

        Resolution {
            root: root.clone(),
            packages,
            revisions: self.revisions,
            passes,
        }
    }
}

fn describe(resolved: &IndexMap<PackageName, Offer>, requirer: &Requirer) -> String {
    match requirer {
        Requirer::Root => "root".to_string(),
        Requirer::Package(name) => match resolved.get(name) {
            Some(offer) => format!("{name} {}", offer.candidate.version),
            None => name.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{parse_requires, Candidate};

    /// Packages as `(name, [(version, [(dep, constraint)])])`.
    #[derive(Debug)]
    struct Table(Vec<(&'static str, Vec<(&'static str, Vec<(&'static str, &'static str)>)>)>);

    impl Repository for Table {
        fn name(&self) -> &str {
            "table"
        }

        fn has_package(&self, name: &str) -> bool {
            self.0.iter().any(|(n, _)| *n == name)
        }

        fn list_candidates(&self, name: &str) -> Vec<Candidate> {
            self.0
                .iter()
                .filter(|(n, _)| *n == name)
                .flat_map(|(_, versions)| versions.iter())
                .map(|(version, requires)| Candidate {
                    name: PackageName::from(name),
                    version: Version::parse(version),
                    requires: parse_requires(requires.iter().copied()).unwrap(),
                })
                .collect()
        }
    }

    fn run(table: &Table, root: &[(&str, &str)]) -> Result<Resolution, CatalystError> {
        let repos: Vec<&dyn Repository> = vec![table];
        let root = parse_requires(root.iter().copied()).unwrap();
        solve(&root, &repos, &ResolverOptions::default())
    }

    #[test]
    fn empty_root_resolves_to_nothing() {
        let table = Table(vec![]);
        let resolution = run(&table, &[]).unwrap();
        assert!(resolution.is_empty());
        assert_eq!(resolution.passes, 1);
    }

    #[test]
    fn transitive_chain() {
        let table = Table(vec![
            ("a/a", vec![("1.0.0", vec![("b/b", "^2.0")])]),
            ("b/b", vec![("2.1.0", vec![("c/c", "*")]), ("3.0.0", vec![])]),
            ("c/c", vec![("0.1.0", vec![]), ("0.2.0", vec![])]),
        ]);
        let resolution = run(&table, &[("a/a", "*")]).unwrap();
        assert_eq!(resolution.version_of("a/a"), Some("1.0.0"));
        assert_eq!(resolution.version_of("b/b"), Some("2.1.0"));
        assert_eq!(resolution.version_of("c/c"), Some("0.2.0"));
        let b = resolution.get("b/b").unwrap();
        assert_eq!(b.required_by, vec![Requirer::Package("a/a".into())]);
    }

    #[test]
    fn reselection_drops_stale_requirements() {
        // a 2.0.0 pulls in c, but the root caps b, and b 1.x caps a below 2.
        let table = Table(vec![
            (
                "a/a",
                vec![("1.0.0", vec![]), ("2.0.0", vec![("c/c", "*")])],
            ),
            ("b/b", vec![("1.0.0", vec![("a/a", "<2")])]),
            ("c/c", vec![("1.0.0", vec![])]),
        ]);
        let resolution = run(&table, &[("a/a", "*"), ("b/b", "*")]).unwrap();
        assert_eq!(resolution.version_of("a/a"), Some("1.0.0"));
        assert_eq!(resolution.version_of("b/b"), Some("1.0.0"));
        assert!(resolution.get("c/c").is_none());
        assert_eq!(resolution.revisions.len(), 1);
        assert_eq!(resolution.revisions[0].from, "2.0.0");
    }

    #[test]
    fn cyclic_requirements_converge() {
        let table = Table(vec![
            ("a/a", vec![("1.0.0", vec![("b/b", "*")])]),
            ("b/b", vec![("1.0.0", vec![("a/a", "1.0.0")])]),
        ]);
        let resolution = run(&table, &[("a/a", "*")]).unwrap();
        assert_eq!(resolution.len(), 2);
    }

    #[test]
    fn pass_ceiling_is_enforced() {
        let table = Table(vec![("a/a", vec![("1.0.0", vec![])])]);
        let repos: Vec<&dyn Repository> = vec![&table];
        let root = parse_requires([("a/a", "*")]).unwrap();
        let err = solve(&root, &repos, &ResolverOptions { max_passes: 1 }).unwrap_err();
        assert!(matches!(err, CatalystError::ResolutionLimit { passes: 1 }));
    }

    #[test]
    fn unknown_transitive_package() {
        let table = Table(vec![("a/a", vec![("1.0.0", vec![("ghost/pkg", "*")])])]);
        let err = run(&table, &[("a/a", "*")]).unwrap_err();
        assert!(matches!(err, CatalystError::PackageNotFound { ref name, .. } if name == "ghost/pkg"));
    }
}
