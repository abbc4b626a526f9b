use catalyst_util::errors::CatalystError;
use miette::Diagnostic;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = CatalystError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_manifest_error_display() {
    let err = CatalystError::Manifest {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: bad syntax");
}

#[test]
fn test_package_not_found_display() {
    let err = CatalystError::package_not_found("othervendor/weird-package");
    assert_eq!(
        err.to_string(),
        "No package named othervendor/weird-package can be found in any repository"
    );
}

#[test]
fn test_version_not_found_display() {
    let err = CatalystError::version_not_found("dukesoft/test-package", "23.34.56");
    let msg = err.to_string();
    assert!(msg.contains("dukesoft/test-package"), "got: {msg}");
    assert!(msg.contains("23.34.56"), "got: {msg}");
    assert!(msg.contains("can be found"), "got: {msg}");
}

#[test]
fn test_unresolveable_display() {
    let err = CatalystError::Unresolveable {
        name: "dukesoft/test-package".to_string(),
        reason: "no candidate".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.starts_with("Unable to resolve dukesoft/test-package"));
    assert!(msg.contains("due to a dependency constraint"));
    let help = err.help().unwrap().to_string();
    assert!(help.contains("Relax one of the listed constraints"));
}

#[test]
fn test_constraint_syntax_display() {
    let err = CatalystError::ConstraintSyntax {
        constraint: ">=".to_string(),
        message: "operator without a version".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid version constraint `>=`: operator without a version"
    );
}

#[test]
fn test_resolution_limit_display() {
    let err = CatalystError::ResolutionLimit { passes: 64 };
    assert_eq!(
        err.to_string(),
        "Dependency resolution did not settle after 64 passes"
    );
}

#[test]
fn test_generic_error_display() {
    let err = CatalystError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: CatalystError = io_err.into();
    assert!(matches!(err, CatalystError::Io(_)));
}
