use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Catalyst operations.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalystError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. catalyst.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your catalyst.toml for syntax errors"))]
    Manifest { message: String },

    /// No registered repository knows the package (or the requested version of it).
    #[error("{}", not_found_message(.name, .version.as_deref()))]
    #[diagnostic(help("Check the package name and the repositories registered for this project"))]
    PackageNotFound {
        name: String,
        version: Option<String>,
    },

    /// The accumulated constraint for a package leaves no candidate version.
    #[error("Unable to resolve {name} due to a dependency constraint conflict: {reason}")]
    #[diagnostic(help(
        "Relax one of the listed constraints or register a repository that publishes a matching version"
    ))]
    Unresolveable { name: String, reason: String },

    /// A version constraint expression could not be parsed.
    #[error("Invalid version constraint `{constraint}`: {message}")]
    #[diagnostic(help(
        "Constraints are whitespace-separated atoms such as `*`, `1.2.0`, `1.*`, `^1.2`, `~1.2.0`, `>=1.0 <2.0`"
    ))]
    ConstraintSyntax { constraint: String, message: String },

    /// The resolver did not reach a fixpoint within its pass ceiling.
    #[error("Dependency resolution did not settle after {passes} passes")]
    #[diagnostic(help("This usually means the requirement graph is cyclic or oscillating"))]
    ResolutionLimit { passes: usize },

    /// A repository backend could not be opened or read.
    #[error("Repository error: {message}")]
    Repository { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

fn not_found_message(name: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => {
            format!("No package named {name} with version {version} can be found in any repository")
        }
        None => format!("No package named {name} can be found in any repository"),
    }
}

impl CatalystError {
    /// Shorthand for a [`CatalystError::PackageNotFound`] without a version.
    pub fn package_not_found(name: impl Into<String>) -> Self {
        Self::PackageNotFound {
            name: name.into(),
            version: None,
        }
    }

    /// Shorthand for a [`CatalystError::PackageNotFound`] naming a specific version.
    pub fn version_not_found(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::PackageNotFound {
            name: name.into(),
            version: Some(version.into()),
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type CatalystResult<T> = miette::Result<T>;
