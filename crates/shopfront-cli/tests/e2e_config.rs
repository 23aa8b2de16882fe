//! E2E tests for the user config file and output mode precedence.
//!
//! The config file lives under the XDG config home, which each test points
//! at a scratch directory, so these tests never touch a real user config.

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Build a Command targeting the sf binary, rooted in `dir`.
fn sf_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sf"));
    cmd.current_dir(dir);
    cmd.env("XDG_CONFIG_HOME", dir.join("xdg"));
    cmd.env_remove("SHOPFRONT_PAYLOAD");
    cmd.env_remove("SHOPFRONT_FORMAT");
    cmd.env("SHOPFRONT_LOG", "error");
    cmd
}

/// Write `content` as the user config inside the scratch XDG home.
fn write_config(dir: &Path, content: &str) {
    let config_dir = dir.join("xdg").join("shopfront");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    std::fs::write(config_dir.join("config.toml"), content).expect("write config");
}

/// Write a payload file into `dir` and return its path.
fn write_payload(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("payload.json");
    std::fs::write(&path, json).expect("write payload");
    path
}

const SAMPLE_PAYLOAD: &str = r#"{
    "orders": {"orders": [
        {"id": 1, "number": "1001", "date": "July 14, 2025",
         "status": "Processing", "total": 129.5}
    ]}
}"#;

// ===========================================================================
// Test 1: Config File Settings
// ===========================================================================

#[test]
fn config_output_preference_applies() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "output = \"json\"\n");
    let payload = write_payload(dir.path(), SAMPLE_PAYLOAD);

    // No --json and no --format: the config entry decides.
    let output = sf_cmd(dir.path())
        .args(["orders", "--payload", payload.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows: Value = serde_json::from_slice(&output.stdout)
        .expect("config output=json should yield JSON on stdout");
    assert_eq!(rows.as_array().map(Vec::len), Some(1));
}

#[test]
fn config_payload_path_applies() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path(), SAMPLE_PAYLOAD);
    write_config(
        dir.path(),
        &format!("payload_path = \"{}\"\n", payload.display()),
    );

    let output = sf_cmd(dir.path()).args(["orders", "--json"]).output().unwrap();
    assert!(
        output.status.success(),
        "config payload_path should be picked up: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let rows: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["number"], "1001");
}

// ===========================================================================
// Test 2: Precedence
// ===========================================================================

#[test]
fn format_flag_beats_config_output() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "output = \"json\"\n");
    let payload = write_payload(dir.path(), SAMPLE_PAYLOAD);

    sf_cmd(dir.path())
        .args(["orders", "--payload", payload.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicates::str::contains("ID  NUMBER  DATE  STATUS  CATEGORY  TOTAL"));
}

#[test]
fn format_env_beats_config_output() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "output = \"pretty\"\n");
    let payload = write_payload(dir.path(), SAMPLE_PAYLOAD);

    let output = sf_cmd(dir.path())
        .env("SHOPFRONT_FORMAT", "json")
        .args(["orders", "--payload", payload.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows: Value = serde_json::from_slice(&output.stdout)
        .expect("SHOPFRONT_FORMAT=json should yield JSON on stdout");
    assert!(rows.is_array());
}

#[test]
fn payload_env_beats_config_payload_path() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{not json").unwrap();
    write_config(dir.path(), &format!("payload_path = \"{}\"\n", bad.display()));
    let good = write_payload(dir.path(), SAMPLE_PAYLOAD);

    // The config names a broken file; the env var must shadow it.
    let output = sf_cmd(dir.path())
        .env("SHOPFRONT_PAYLOAD", &good)
        .args(["orders", "--json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "env var should shadow the config path: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

// ===========================================================================
// Test 3: Error Paths
// ===========================================================================

#[test]
fn malformed_config_fails_with_code() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "output = [unterminated\n");

    sf_cmd(dir.path())
        .args(["orders", "--json"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("E1102"));
}

#[test]
fn missing_config_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    // Scratch XDG home exists but holds no config file.
    std::fs::create_dir_all(dir.path().join("xdg")).unwrap();
    sf_cmd(dir.path()).args(["orders", "--json"]).assert().success();
}
