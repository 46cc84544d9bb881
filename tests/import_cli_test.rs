//! candsync import / show の結合テスト

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn candsync(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("candsync").unwrap();
    cmd.env_remove("CANDSYNC_BASE_URL")
        .env_remove("CANDSYNC_KEY")
        .env_remove("CANDSYNC_LOG")
        .env("CANDSYNC_STORE", temp.path().join("storage.json"));
    cmd
}

#[test]
fn test_import_local_file_reports_count() {
    let temp = TempDir::new().unwrap();
    let resource = temp.path().join("candidatures.json");
    fs::write(&resource, r#"{"candidatures":[{"id":1},{"id":2}]}"#).unwrap();

    candsync(&temp)
        .arg("import")
        .arg(&resource)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 candidatures importées"))
        .stderr(predicate::str::contains("2 candidatures"));

    candsync(&temp)
        .args(["show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 2"));
}

#[test]
fn test_import_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    candsync(&temp)
        .arg("import")
        .arg(temp.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("introuvable ou invalide"));

    assert!(!temp.path().join("storage.json").exists());
}

#[test]
fn test_show_empty_store() {
    let temp = TempDir::new().unwrap();

    candsync(&temp)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No candidatures stored."));
}

#[test]
fn test_import_invalid_base_url_is_notified() {
    let temp = TempDir::new().unwrap();

    candsync(&temp)
        .env("CANDSYNC_BASE_URL", "not a url")
        .args(["import", "candidatures.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("introuvable ou invalide"))
        .stderr(predicate::str::contains("Erreur:"));

    assert!(!temp.path().join("storage.json").exists());
}
