use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use nearby_stops::pipeline::PROMPT;
use serde_json::json;
use tempfile::{TempDir, tempdir};

use crate::helper::{APP_ID, APP_KEY, TestHelper, stop_points_body};

/// Run the built binary in `dir` with only `envs` set, feeding `input` on stdin.
async fn run_binary(dir: PathBuf, envs: Vec<(&'static str, String)>, input: &'static str) -> Output {
    tokio::task::spawn_blocking(move || {
        let mut child = Command::new(env!("CARGO_BIN_EXE_nearby-stops"))
            .current_dir(dir)
            .env_clear()
            .envs(envs)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        // A config failure exits before reading, so the pipe may already be closed
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(input.as_bytes());
        }

        child.wait_with_output().unwrap()
    })
    .await
    .unwrap()
}

/// A working directory holding `nearby-stops.yml` pointed at the mock server.
fn config_dir(helper: &TestHelper, extra: &str) -> TempDir {
    let dir = tempdir().unwrap();
    let yaml = format!(
        "postcodes_base_url: \"{base}\"\ntfl_base_url: \"{base}\"\ntfl_app_id: \"{APP_ID}\"\ntfl_app_key: \"file-key\"\n{extra}",
        base = helper.base_url(),
    );
    std::fs::write(dir.path().join("nearby-stops.yml"), yaml).unwrap();
    dir
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_credentials_exit_with_config_status() {
    let dir = tempdir().unwrap();

    let output = run_binary(dir.path().to_path_buf(), vec![], "SW1A 1AA\n").await;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("TFL_APP_ID is not set"));
    assert!(output.stdout.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_geocoder_exits_with_failure() {
    let dir = tempdir().unwrap();
    let envs = vec![
        ("TFL_APP_ID", APP_ID.to_string()),
        ("TFL_APP_KEY", APP_KEY.to_string()),
        ("POSTCODES_BASE_URL", "http://127.0.0.1:1".to_string()),
    ];

    let output = run_binary(dir.path().to_path_buf(), envs, "SW1A 1AA\n").await;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: geocoding postcode"));
    assert_eq!(String::from_utf8_lossy(&output.stdout), PROMPT);
}

#[tokio::test(flavor = "multi_thread")]
async fn no_stops_exits_successfully() {
    let helper = TestHelper::new().await;
    helper.mock_postcode_location("SW1A1AA", 51.5, -0.1).await;
    helper
        .mock_stop_points(200, json!({"stopPoints": []}), 1)
        .await;
    let dir = config_dir(&helper, "");
    // Environment takes precedence over the file's key
    let envs = vec![("TFL_APP_KEY", APP_KEY.to_string())];

    let output = run_binary(dir.path().to_path_buf(), envs, "SW1A 1AA\n").await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), PROMPT);
}

#[tokio::test(flavor = "multi_thread")]
async fn stop_count_from_config_file() {
    let helper = TestHelper::new().await;
    helper.mock_postcode_location("SW1A1AA", 51.5, -0.1).await;
    helper.mock_stop_points(200, stop_points_body(8), 1).await;
    let dir = config_dir(&helper, "stop_count: 2\n");
    let envs = vec![("TFL_APP_KEY", APP_KEY.to_string())];

    let output = run_binary(dir.path().to_path_buf(), envs, "SW1A 1AA\n").await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{PROMPT}Stop 1\nStop 2\n")
    );
}
