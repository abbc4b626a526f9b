use std::path::Path;

use catalyst_util::fs::{find_ancestor_with, resolve_relative, sorted_subdirs};
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_direct() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("catalyst.toml"), "").unwrap();
    let result = find_ancestor_with(tmp.path(), "catalyst.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_nested() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("catalyst.toml"), "").unwrap();
    let nested = tmp.path().join("a").join("b").join("c");
    std::fs::create_dir_all(&nested).unwrap();
    let result = find_ancestor_with(&nested, "catalyst.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = find_ancestor_with(tmp.path(), "NonExistent.file");
    assert_eq!(result, None);
}

#[test]
fn test_resolve_relative_keeps_absolute() {
    let tmp = TempDir::new().unwrap();
    let abs = tmp.path().join("packages");
    assert_eq!(resolve_relative(Path::new("/elsewhere"), &abs), abs);
}

#[test]
fn test_resolve_relative_joins_base() {
    let resolved = resolve_relative(Path::new("/project"), Path::new("../packages"));
    assert_eq!(resolved, Path::new("/project/../packages"));
}

#[test]
fn test_sorted_subdirs_skips_files() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("b")).unwrap();
    std::fs::create_dir(tmp.path().join("a")).unwrap();
    std::fs::write(tmp.path().join("c.txt"), "").unwrap();
    let dirs = sorted_subdirs(tmp.path()).unwrap();
    assert_eq!(dirs, vec![tmp.path().join("a"), tmp.path().join("b")]);
}
