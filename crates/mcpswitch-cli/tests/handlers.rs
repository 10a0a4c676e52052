//! Handler flows against a real on-disk database and artifact.

use std::path::Path;
use std::time::Duration;

use mcpswitch_cli::handlers::{self, add::AddArgs, import::ImportOptions};
use mcpswitch_cli::{CliConfig, CliContext, CliError, bootstrap};
use mcpswitch_core::AppConfig;
use serde_json::Value;

async fn context(dir: &Path) -> CliContext {
    let app = AppConfig {
        database_path: dir.join("data").join("mcpswitch.db"),
        artifact_path: dir.join("mcp.json"),
        auto_import_path: dir.join("mcp.json"),
        poll_interval: Duration::from_secs(1),
    };
    bootstrap(CliConfig { app }).await.unwrap()
}

fn read_servers(path: &Path) -> serde_json::Map<String, Value> {
    let raw = std::fs::read_to_string(path).unwrap();
    let root: Value = serde_json::from_str(&raw).unwrap();
    root["mcpServers"].as_object().unwrap().clone()
}

#[tokio::test]
async fn add_enable_disable_updates_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path()).await;

    let args = AddArgs {
        name: "files".into(),
        command: Some("npx".into()),
        args: vec!["-y".into(), "server-files".into()],
        env: vec!["ROOT=/tmp".into()],
        ..AddArgs::default()
    };
    handlers::add::execute(&ctx, args).await.unwrap();

    handlers::toggle::execute_set(&ctx, "files", true).await.unwrap();
    let servers = read_servers(&ctx.config().artifact_path);
    assert_eq!(servers["files"]["command"], "npx");
    assert_eq!(servers["files"]["env"]["ROOT"], "/tmp");

    handlers::toggle::execute_set(&ctx, "fil", false).await.unwrap();
    assert!(read_servers(&ctx.config().artifact_path).is_empty());
}

#[tokio::test]
async fn duplicate_add_maps_to_general_error() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path()).await;

    let args = || AddArgs {
        name: "remote".into(),
        url: Some("https://mcp.example.com".into()),
        ..AddArgs::default()
    };
    handlers::add::execute(&ctx, args()).await.unwrap();
    let err = handlers::add::execute(&ctx, args()).await.unwrap_err();

    let cli = CliError::from_anyhow(&err);
    assert_eq!(cli.exit_code(), 1);
    assert!(cli.to_string().contains("already exists"));
}

#[tokio::test]
async fn unknown_server_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path()).await;

    let err = handlers::toggle::execute_toggle(&ctx, "ghost").await.unwrap_err();
    assert_eq!(CliError::from_anyhow(&err).exit_code(), 66);
}

#[tokio::test]
async fn import_with_sync_then_forced_remove() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path()).await;

    let source = dir.path().join("servers.json");
    std::fs::write(
        &source,
        r#"{"mcpServers": {
            "alpha": {"command": "npx", "args": ["-y", "alpha"]},
            "beta": {"url": "https://beta.example.com"}
        }}"#,
    )
    .unwrap();

    let options = ImportOptions {
        enable_all: true,
        sync_after: true,
        ..ImportOptions::default()
    };
    handlers::import::execute(&ctx, &source, options).await.unwrap();

    let servers = read_servers(&ctx.config().artifact_path);
    assert_eq!(servers.len(), 2);

    handlers::remove::execute(&ctx, "beta", true).await.unwrap();
    let servers = read_servers(&ctx.config().artifact_path);
    assert_eq!(servers.len(), 1);
    assert!(servers.contains_key("alpha"));
    assert_eq!(ctx.app().servers().status().await.unwrap().total, 1);
}

#[tokio::test]
async fn export_to_file_writes_enabled_only() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path()).await;

    for (name, enable) in [("on", true), ("off", false)] {
        let args = AddArgs {
            name: name.into(),
            url: Some(format!("https://{name}.example.com")),
            enable,
            ..AddArgs::default()
        };
        handlers::add::execute(&ctx, args).await.unwrap();
    }

    let out = dir.path().join("out").join("export.json");
    handlers::export::execute(&ctx, Some(&out), false).await.unwrap();

    let servers = read_servers(&out);
    assert_eq!(servers.len(), 1);
    assert!(servers.contains_key("on"));
}

#[tokio::test]
async fn artifact_check_reflects_failed_publish() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path()).await;

    let enabled = |name: &str| AddArgs {
        name: name.into(),
        url: Some(format!("https://{name}.example.com")),
        enable: true,
        ..AddArgs::default()
    };

    handlers::add::execute(&ctx, enabled("good")).await.unwrap();
    assert!(handlers::sync::artifact_lists(&ctx, "good").await);

    // Unparseable artifact: the add still succeeds, the check reports the miss
    std::fs::write(&ctx.config().artifact_path, "not json").unwrap();
    handlers::add::execute(&ctx, enabled("late")).await.unwrap();
    assert!(!handlers::sync::artifact_lists(&ctx, "late").await);
    assert_eq!(ctx.app().servers().status().await.unwrap().enabled, 2);

    handlers::sync::execute(&ctx).await.unwrap_err();
    std::fs::remove_file(&ctx.config().artifact_path).unwrap();
    handlers::sync::execute(&ctx).await.unwrap();
    handlers::remove::execute(&ctx, "late", true).await.unwrap();
    assert!(!handlers::sync::artifact_lists(&ctx, "late").await);
    assert!(handlers::sync::artifact_lists(&ctx, "good").await);
}
