use std::path::{Path, PathBuf};

use catalyst_core::manifest::{Manifest, RepositoryEntry, RepositoryKind};
use catalyst_registry::source::{open, open_all};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_open_catalog_relative_to_base() {
    let entry = RepositoryEntry::Detailed {
        kind: RepositoryKind::Catalog,
        path: PathBuf::from("../catalogs/simple.json"),
    };
    let repo = open("simple", &entry, &fixtures_dir().join("project")).unwrap();
    assert_eq!(repo.name(), "simple");
    assert!(repo.has_package("othervendor/nesting-package"));
}

#[test]
fn test_open_directory_shorthand() {
    let entry = RepositoryEntry::Path(fixtures_dir().join("packages"));
    let repo = open("local", &entry, Path::new("/nonexistent-base")).unwrap();
    assert!(repo.has_package("dukesoft/simple-project"));
}

#[test]
fn test_open_all_from_manifest() {
    let manifest = Manifest::parse_toml(
        r#"
[package]
name = "t/app"

[repositories]
local = "packages"
simple = { kind = "catalog", path = "catalogs/simple.json" }
"#,
    )
    .unwrap();
    let repos = open_all(
        manifest
            .repositories
            .iter()
            .map(|(name, entry)| (name.as_str(), entry)),
        &fixtures_dir(),
    )
    .unwrap();
    let names: Vec<&str> = repos.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["local", "simple"]);
}

#[test]
fn test_kind_mismatch_fails_to_open() {
    // A directory handed to the catalog backend.
    let entry = RepositoryEntry::Detailed {
        kind: RepositoryKind::Catalog,
        path: fixtures_dir().join("packages"),
    };
    assert!(open("wrong", &entry, &fixtures_dir()).is_err());
}
