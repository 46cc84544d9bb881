//! import コマンドのユニットテスト

use super::*;
use crate::store::KeyValueStore;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_args_parsing() {
    use clap::CommandFactory;
    let cmd = Args::command();
    cmd.debug_assert();
}

#[test]
#[serial]
fn test_sync_config_from_args() {
    let args = Args::parse_from([
        "import",
        "data.json",
        "--store",
        "/tmp/store.json",
        "--key",
        "bot",
        "--base-url",
        "http://localhost:8766/",
    ]);

    let config = args.sync_config();

    assert_eq!(config.resource, "data.json");
    assert_eq!(config.state_key, "bot");
    assert_eq!(config.store_path, std::path::PathBuf::from("/tmp/store.json"));
    assert_eq!(config.base_url.as_deref(), Some("http://localhost:8766/"));
}

#[test]
fn test_http_config_timeout() {
    let args = Args::parse_from(["import", "--timeout", "10"]);
    assert_eq!(args.http_config().timeout, Some(Duration::from_secs(10)));

    let args = Args::parse_from(["import"]);
    assert_eq!(args.http_config().timeout, None);
}

fn args_for(temp: &TempDir, resource: &str) -> Args {
    Args {
        resource: Some(temp.path().join(resource).to_string_lossy().to_string()),
        store: StoreArgs {
            store: Some(temp.path().join("storage.json")),
            key: Some("alternance_bot".to_string()),
        },
        base_url: None,
        timeout: None,
        wait: false,
    }
}

#[tokio::test]
#[serial]
async fn test_run_imports_local_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("candidatures.json"),
        r#"{"candidatures":[{"id":1},{"id":2}]}"#,
    )
    .unwrap();

    run(args_for(&temp, "candidatures.json")).await.unwrap();

    let store = FileStore::new(Arc::new(RealFs), temp.path().join("storage.json"));
    let raw = store.get("alternance_bot").unwrap().unwrap();
    let state: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(state["candidatures"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[serial]
async fn test_run_missing_file_fails_without_writing() {
    let temp = TempDir::new().unwrap();

    let result = run(args_for(&temp, "candidatures.json")).await;

    let err = result.unwrap_err();
    assert!(err.contains("resource_unavailable"));
    assert!(!temp.path().join("storage.json").exists());
}

#[tokio::test]
#[serial]
async fn test_run_invalid_base_url_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    let mut args = args_for(&temp, "candidatures.json");
    args.resource = Some("candidatures.json".to_string());
    args.base_url = Some("not a url".to_string());

    let err = run(args).await.unwrap_err();

    assert!(err.contains("resource_unavailable"));
    assert!(!temp.path().join("storage.json").exists());
}
