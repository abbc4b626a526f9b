use catalyst_core::config::{GlobalConfig, DEFAULT_MAX_PASSES};
use catalyst_core::manifest::{RepositoryEntry, RepositoryKind};
use tempfile::TempDir;

#[test]
fn test_global_config_default_max_passes() {
    let config = GlobalConfig::default();
    assert_eq!(config.resolver.max_passes, DEFAULT_MAX_PASSES);
}

#[test]
fn test_global_config_default_empty_repos() {
    let config = GlobalConfig::default();
    assert!(config.repositories.is_empty());
}

#[test]
fn test_global_config_empty_toml_uses_defaults() {
    let config: GlobalConfig = toml::from_str("").unwrap();
    assert_eq!(config.resolver.max_passes, DEFAULT_MAX_PASSES);
}

#[test]
fn test_global_config_parse_from_toml() {
    let toml = r#"
[resolver]
max-passes = 10

[repositories]
shared = "/srv/catalyst/packages"
index = { kind = "catalog", path = "index.json" }
"#;
    let config: GlobalConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.resolver.max_passes, 10);
    let names: Vec<&String> = config.repositories.keys().collect();
    assert_eq!(names, vec!["shared", "index"]);
    assert_eq!(config.repositories["shared"].kind(), RepositoryKind::Directory);
    assert_eq!(config.repositories["index"].kind(), RepositoryKind::Catalog);
}

#[test]
fn test_load_from_missing_file_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&tmp.path().join("config.toml")).unwrap();
    assert!(config.repositories.is_empty());
}

#[test]
fn test_load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[repositories]\nlocal = \"packages\"\n").unwrap();
    let config = GlobalConfig::load_from(&path).unwrap();
    assert_eq!(
        config.repositories["local"],
        RepositoryEntry::Path("packages".into())
    );
}

#[test]
fn test_load_from_malformed_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[resolver\n").unwrap();
    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse global config"));
}
