//! Integration tests for xplanectl
//!
//! These run the binary without a simulator, so they cover argument handling
//! and the exit code of each error category.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn xplanectl() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("xplanectl")?;
    cmd.env_remove("XPLANECTL_CONFIG").env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn test_cli_help() -> TestResult {
    xplanectl()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("X-Plane host"));
    Ok(())
}

#[test]
fn test_cli_version() -> TestResult {
    xplanectl()?
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xplanectl"));
    Ok(())
}

#[test]
fn test_completion_generation() -> TestResult {
    xplanectl()?
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_xplanectl"));
    Ok(())
}

#[test]
fn test_invalid_listen_host_exit_code() -> TestResult {
    xplanectl()?
        .args(["take-off", "127.0.0.1", "--listen-host", "not-an-ip"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid address"));
    Ok(())
}

#[test]
fn test_missing_config_exit_code() -> TestResult {
    let dir = TempDir::new()?;
    let missing = dir.path().join("missing.yaml");
    xplanectl()?
        .arg("take-off")
        .arg("127.0.0.1")
        .arg("--config")
        .arg(&missing)
        .assert()
        .failure()
        .code(3);
    Ok(())
}

#[test]
fn test_invalid_config_exit_code_json() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("tuning.yaml");
    fs::write(&path, "rudder_gain: -2.0\n")?;

    let output = xplanectl()?
        .arg("--json")
        .arg("take-off")
        .arg("127.0.0.1")
        .arg("--config")
        .arg(&path)
        .output()?;
    assert_eq!(output.status.code(), Some(3));

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], 3);
    let message = json["error"]["message"].as_str().ok_or("no message")?;
    assert!(message.contains("rudder_gain"));
    Ok(())
}

#[test]
fn test_unknown_config_key_exit_code() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("tuning.yaml");
    fs::write(&path, "rotate_elevator: 0.3\nflaps: 10\n")?;
    xplanectl()?
        .arg("take-off")
        .arg("127.0.0.1")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .code(3);
    Ok(())
}

#[test]
fn test_unknown_subcommand_fails() -> TestResult {
    xplanectl()?.arg("land").assert().failure();
    Ok(())
}
