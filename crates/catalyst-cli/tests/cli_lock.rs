use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn catalyst_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("catalyst").unwrap();
    cmd.env("CATALYST_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn write_project(dir: &TempDir, constraint: &str) {
    let catalog = fixtures_dir().join("catalogs/simple.json");
    std::fs::write(
        dir.path().join("catalyst.toml"),
        format!(
            "[package]\nname = \"t/app\"\n\n[require]\n\"othervendor/test-package\" = \"{constraint}\"\n\n[repositories]\nsimple = {{ kind = \"catalog\", path = {:?} }}\n",
            catalog.display().to_string()
        ),
    )
    .unwrap();
}

#[test]
fn test_lock_writes_lockfile() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    write_project(&tmp, "*");

    catalyst_cmd(&home)
        .current_dir(tmp.path())
        .arg("lock")
        .assert()
        .success()
        .stderr(predicate::str::contains("Locked"));

    let lock = std::fs::read_to_string(tmp.path().join("catalyst.lock")).unwrap();
    assert!(lock.contains("name = \"othervendor/test-package\""));
    assert!(lock.contains("version = \"v1.0.2\""));
    assert!(lock.contains("name = \"dukesoft/anotherpackage\""));
    assert!(lock.contains("version = \"1.5.1\""));
}

#[test]
fn test_relock_reports_updates() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    write_project(&tmp, "*");
    catalyst_cmd(&home)
        .current_dir(tmp.path())
        .arg("lock")
        .assert()
        .success();

    write_project(&tmp, "1.0.1");
    catalyst_cmd(&home)
        .current_dir(tmp.path())
        .arg("lock")
        .assert()
        .success()
        .stderr(predicate::str::contains("othervendor/test-package v1.0.2 -> 1.0.1"));

    let lock = std::fs::read_to_string(tmp.path().join("catalyst.lock")).unwrap();
    assert!(lock.contains("version = \"0.1.0\""));
}
