//! Constraint conflict reporting and selection revision tracking.

use std::fmt;

use catalyst_core::package::PackageName;
use catalyst_util::errors::CatalystError;

use crate::constraint::Constraint;

/// Every requirement on a package whose intersection no candidate satisfies.
#[derive(Debug, Clone)]
pub struct ConstraintConflict {
    pub package: PackageName,
    pub requirements: Vec<ConflictingRequirement>,
    /// Labels the repositories advertise for the package.
    pub available: Vec<String>,
}

/// One contributor to a conflict: who asked, and for what.
#[derive(Debug, Clone)]
pub struct ConflictingRequirement {
    /// `root` or `vendor/name version` of the requiring package.
    pub requirer: String,
    pub constraint: Constraint,
}

impl ConstraintConflict {
    /// The typed resolver failure for this conflict.
    pub fn into_error(self) -> CatalystError {
        CatalystError::Unresolveable {
            name: self.package.to_string(),
            reason: self.to_string(),
        }
    }
}

impl fmt::Display for ConstraintConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is required as ", self.package)?;
        for (i, req) in self.requirements.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "`{}` by {}", req.constraint, req.requirer)?;
        }
        if self.available.is_empty() {
            f.write_str("; no versions are published")
        } else {
            write!(
                f,
                "; none of the available versions match ({})",
                self.available.join(", ")
            )
        }
    }
}

/// A package whose selection changed after it was first chosen.
#[derive(Debug, Clone)]
pub struct Revision {
    pub package: PackageName,
    pub from: String,
    pub to: String,
    pub pass: usize,
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} (pass {})",
            self.package, self.from, self.to, self.pass
        )
    }
}
