//! End-to-end tests for the `bondcalc` binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use assert_cmd::Command;
use bondcalc_api::{create_router, AppState, ServerConfig};
use chrono::NaiveDate;
use predicates::prelude::*;
use tempfile::TempDir;

const CONNECTION_MESSAGE: &str =
    "Unable to connect to the server. Please ensure the backend is running.";

/// A `bondcalc` command with its config file isolated under `dir`.
fn bondcalc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bondcalc").unwrap();
    cmd.env("BONDCALC_CONFIG", config_file(dir))
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("BONDCALC_API_BASE_URL");
    cmd
}

fn config_file(dir: &TempDir) -> PathBuf {
    dir.path().join("config.json")
}

fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[test]
fn test_defaults_table() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .arg("defaults")
        .assert()
        .success()
        .stdout(predicate::str::contains("Face Value ($)"))
        .stdout(predicate::str::contains("$1,000.00"))
        .stdout(predicate::str::contains("$950.00"))
        .stdout(predicate::str::contains("Semi-Annual"));
}

#[test]
fn test_defaults_json() {
    let dir = TempDir::new().unwrap();

    let output = bondcalc(&dir)
        .args(["--format", "json", "defaults"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["faceValue"], 1000.0);
    assert_eq!(value["couponFrequency"], "semiAnnual");
}

#[test]
fn test_local_calculation_table() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .args(["calculate", "--local", "--issue-date", "2026-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.26%"))
        .stdout(predicate::str::contains("6.27% (Effective annual rate)"))
        .stdout(predicate::str::contains("$250.00"))
        .stdout(predicate::str::contains("Discount"))
        .stdout(predicate::str::contains("Trading below face value"))
        .stdout(predicate::str::contains("Jul 15, 2026"))
        .stdout(predicate::str::contains("Jan 15, 2031"))
        .stdout(predicate::str::contains("Showing 10 payment periods"));
}

#[test]
fn test_local_calculation_csv_descending() {
    let dir = TempDir::new().unwrap();

    let output = bondcalc(&dir)
        .args([
            "--format",
            "csv",
            "calculate",
            "--local",
            "--issue-date",
            "2026-01-15",
            "--order",
            "desc",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with("period,paymentDate"));
    assert!(lines[1].starts_with("10,2031-01-15"));
    assert!(lines[10].starts_with("1,2026-07-15"));
}

#[test]
fn test_local_premium_annual() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .args([
            "calculate",
            "--local",
            "--issue-date",
            "2026-01-15",
            "--coupon-rate",
            "6",
            "--market-price",
            "1020",
            "--years",
            "10",
            "--frequency",
            "annual",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Premium"))
        .stdout(predicate::str::contains("Trading above face value"))
        .stdout(predicate::str::contains("Jan 15, 2036"));
}

#[test]
fn test_validation_failure() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .args(["calculate", "--local", "--face-value", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Face value must be greater than 0"));
}

#[test]
fn test_validation_runs_before_any_request() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .args(["calculate", "--years", "0.2", "--frequency", "annual"])
        .args(["--api-url", &unused_local_url()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid bond inputs: Years to maturity must cover at least one coupon period",
        ))
        .stderr(predicate::str::contains(CONNECTION_MESSAGE).not());
}

#[test]
fn test_huge_maturity_rejected() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .args(["calculate", "--local", "--years", "1e12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid bond inputs: Years to maturity must be 100 or less",
        ));
}

#[test]
fn test_issue_date_requires_local() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .args(["calculate", "--issue-date", "2026-01-15"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_issue_date() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .args(["calculate", "--local", "--issue-date", "15/01/2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_config_set_get_path() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .args(["config", "set", "timeout", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set timeout_secs = 5"));

    bondcalc(&dir)
        .args(["config", "get", "timeout_secs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeout_secs: 5"));

    bondcalc(&dir)
        .args(["config", "get", "url"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_base_url: http://localhost:3000"));

    bondcalc(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Status: exists"));

    let saved = std::fs::read_to_string(config_file(&dir)).unwrap();
    assert!(saved.contains("\"timeout_secs\": 5"));
}

#[test]
fn test_config_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .args(["config", "set", "timeout", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timeout"));

    bondcalc(&dir)
        .args(["config", "set", "colors", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));

    assert!(!config_file(&dir).exists());
}

#[test]
fn test_saved_default_format() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .args(["config", "set", "format", "json"])
        .assert()
        .success();

    bondcalc(&dir)
        .args(["calculate", "--local", "--issue-date", "2026-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"premiumOrDiscount\": \"discount\""));

    bondcalc(&dir)
        .args(["config", "reset", "--all"])
        .assert()
        .success();

    bondcalc(&dir)
        .args(["config", "get", "format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_format: table"));
}

#[test]
fn test_remote_connection_refused() {
    let dir = TempDir::new().unwrap();

    bondcalc(&dir)
        .args(["calculate", "--api-url", &unused_local_url()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(CONNECTION_MESSAGE));
}

#[test]
fn test_saved_api_url_is_used() {
    let dir = TempDir::new().unwrap();
    let url = unused_local_url();

    bondcalc(&dir)
        .args(["config", "set", "api_base_url", &url])
        .assert()
        .success();

    bondcalc(&dir)
        .arg("calculate")
        .assert()
        .failure()
        .stderr(predicate::str::contains(CONNECTION_MESSAGE));
}

async fn start_api_server() -> SocketAddr {
    let state = AppState::new(ServerConfig {
        valuation_date: NaiveDate::from_ymd_opt(2026, 1, 15),
        ..ServerConfig::default()
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    addr
}

#[tokio::test(flavor = "multi_thread")]
async fn test_remote_calculation() {
    let addr = start_api_server().await;
    let dir = TempDir::new().unwrap();

    let assert = tokio::task::spawn_blocking(move || {
        bondcalc(&dir)
            .env("BONDCALC_API_BASE_URL", format!("http://{addr}"))
            .args(["--format", "csv", "calculate"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("1,2026-07-15,25.0,25.0,1000.0"))
        .stdout(predicate::str::contains("10,2031-01-15,25.0,250.0,0.0"));
}
