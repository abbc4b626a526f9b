use std::path::PathBuf;

use catalyst_registry::catalog::CatalogRepository;
use catalyst_resolver::repository::Repository;
use catalyst_util::errors::CatalystError;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn simple() -> CatalogRepository {
    CatalogRepository::from_path("simple", &fixtures_dir().join("catalogs/simple.json")).unwrap()
}

#[test]
fn test_fixture_catalog_loads() {
    let catalog = simple();
    assert_eq!(catalog.name(), "simple");
    assert!(catalog.has_package("dukesoft/test-package"));
    assert!(!catalog.has_package("othervendor/weird-package"));
}

#[test]
fn test_candidates_keep_publication_order() {
    let labels: Vec<String> = simple()
        .list_candidates("dukesoft/test-package")
        .into_iter()
        .map(|c| c.version.to_string())
        .collect();
    assert_eq!(
        labels,
        vec!["v1.0.0", "1.0.1", "v1.0.2", "v1.1.2", "1.430.429", "2.0.0", "2.0.2", "dev"]
    );
}

#[test]
fn test_get_requires_exact_label() {
    let catalog = simple();
    let requires = catalog
        .get_requires("othervendor/test-package", "v1.0.2")
        .unwrap();
    assert_eq!(requires["dukesoft/anotherpackage"].to_string(), "^1.0");

    // Labels are matched exactly, not by ordering.
    let err = catalog
        .get_requires("othervendor/test-package", "1.0.2")
        .unwrap_err();
    assert!(matches!(
        err,
        CatalystError::PackageNotFound { version: Some(ref v), .. } if v == "1.0.2"
    ));
}

#[test]
fn test_unknown_package_has_no_candidates() {
    assert!(simple().list_candidates("nobody/nothing").is_empty());
}

#[test]
fn test_empty_source_is_not_a_location() {
    let catalog = simple();
    assert_eq!(catalog.locate("dukesoft/test-package", "1.0.1"), None);
    assert_eq!(
        catalog.locate("dukesoft/anotherpackage", "1.2.0").as_deref(),
        Some("git@github.com:dukesoft/anotherpackage.git")
    );
}

#[test]
fn test_missing_catalog_file() {
    let err = CatalogRepository::from_path("gone", &fixtures_dir().join("catalogs/missing.json"))
        .unwrap_err();
    assert!(matches!(err, CatalystError::Repository { .. }));
}
