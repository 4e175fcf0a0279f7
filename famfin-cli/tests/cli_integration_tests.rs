//! Integration tests for the `famfin` binary.

use std::{path::Path, time::Duration};

use assert_cmd::{
    assert::{Assert, OutputAssertExt},
    cargo::cargo_bin_cmd,
};
use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION, header::COOKIE},
    response::{IntoResponse, Response},
    routing::get,
};
use predicates::prelude::PredicateBooleanExt;
use serde_json::json;
use tempfile::TempDir;

const TOKEN: &str = "secret";
const COOKIE_VALUE: &str = "sid=abc123";

fn famfin(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("famfin");
    cmd.current_dir(dir)
        .env_remove("FAMFIN_CONFIG")
        .env_remove("FAMFIN_API_BASE_URL")
        .env_remove("FAMFIN_LOG_FORMAT")
        .env_remove("RUST_LOG")
        .env("FAMFIN_STATE_DIR", dir.join("state"))
        .timeout(Duration::from_secs(10));
    cmd
}

/// Runs the binary off the runtime so the in-process API keeps serving.
async fn run(dir: &Path, api: &str, args: &[&str]) -> Assert {
    let mut cmd = famfin(dir);
    cmd.arg("--api").arg(api).args(args);
    tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap()
        .assert()
}

fn signed_in(headers: &HeaderMap) -> bool {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {TOKEN}"));
    let cookie = headers
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains(COOKIE_VALUE));
    bearer || cookie
}

async fn profile(headers: HeaderMap) -> Response {
    if !signed_in(&headers) {
        return Json(json!({ "success": false, "message": "no session" })).into_response();
    }
    Json(json!({
        "success": true,
        "data": {
            "id": "u-42",
            "email": "ada@example.com",
            "name": "Ada Lovelace",
            "role": "ADMIN"
        }
    }))
    .into_response()
}

async fn members(headers: HeaderMap) -> Response {
    if !signed_in(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "data": [{
            "_id": "m-1",
            "userId": "u-7",
            "name": "Grace",
            "email": "grace@example.com",
            "role": "MEMBER",
            "relation": "Sister",
            "monthlyLimit": 250.0
        }]
    }))
    .into_response()
}

async fn summary() -> impl IntoResponse {
    Json(json!({
        "totalWealth": 120000.0,
        "monthlySpending": 3200.5,
        "monthlyIncome": 5000.0,
        "budgetStatus": 64.0
    }))
}

async fn spawn_api() -> String {
    let router = Router::new()
        .route("/api/users/profile", get(profile))
        .route("/api/members", get(members))
        .route("/api/reports/summary", get(summary));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();

    famfin(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("session"))
        .stdout(predicates::str::contains("members"))
        .stdout(predicates::str::contains("reports"))
        .stdout(predicates::str::contains("--api"));
}

#[test]
fn test_config_generates_json_file() {
    let dir = TempDir::new().unwrap();

    famfin(dir.path())
        .args(["config", "--format", "json"])
        .assert()
        .success()
        .stdout(predicates::str::contains("famfin.json"));

    let contents = std::fs::read_to_string(dir.path().join("famfin.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["api_base_url"], "http://localhost:5000/api");
    assert_eq!(value["storage_key"], "auth-storage");
}

#[test]
fn test_config_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();

    famfin(dir.path())
        .args(["config", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unsupported configuration format"));
    assert!(!dir.path().join("famfin.xml").exists());
}

#[test]
fn test_completion_for_bash() {
    let dir = TempDir::new().unwrap();

    famfin(dir.path())
        .args(["completion", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicates::str::contains("famfin"));
}

#[test]
fn test_status_without_session() {
    let dir = TempDir::new().unwrap();

    famfin(dir.path())
        .args(["session", "status"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Not signed in"));
}

#[test]
fn test_login_requires_credentials() {
    let dir = TempDir::new().unwrap();

    famfin(dir.path())
        .args(["session", "login"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("provide --cookie or --token"));
}

#[test]
fn test_monthly_report_rejects_bad_month() {
    let dir = TempDir::new().unwrap();

    famfin(dir.path())
        .args(["reports", "monthly", "--year", "2026", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("month must be between 1 and 12"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_token_login_then_status_and_members() {
    let api = spawn_api().await;
    let dir = TempDir::new().unwrap();

    run(dir.path(), &api, &["session", "login", "--token", TOKEN])
        .await
        .success()
        .stdout(predicates::str::contains(
            "Signed in as Ada Lovelace <ada@example.com> (ADMIN)",
        ));

    run(dir.path(), &api, &["session", "status"])
        .await
        .success()
        .stdout(predicates::str::contains("Signed in as Ada Lovelace"));

    run(dir.path(), &api, &["members", "list"])
        .await
        .success()
        .stdout(predicates::str::contains("m-1\tGrace\tgrace@example.com"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cookie_login_survives_between_runs() {
    let api = spawn_api().await;
    let dir = TempDir::new().unwrap();

    run(dir.path(), &api, &["session", "login", "--cookie", COOKIE_VALUE])
        .await
        .success();
    assert!(dir.path().join("state").join("session.cookies").exists());

    run(dir.path(), &api, &["session", "check"])
        .await
        .success()
        .stdout(predicates::str::contains("Signed in as"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_login_reports_failure() {
    let api = spawn_api().await;
    let dir = TempDir::new().unwrap();

    run(dir.path(), &api, &["session", "login", "--token", "wrong"])
        .await
        .failure()
        .stderr(predicates::str::contains("Login failed. Please try again."))
        .stderr(predicates::str::contains("login failed"));

    run(dir.path(), &api, &["session", "status"])
        .await
        .success()
        .stdout(predicates::str::contains("Not signed in"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_login_signs_out_previous_session() {
    let api = spawn_api().await;
    let dir = TempDir::new().unwrap();

    run(dir.path(), &api, &["session", "login", "--token", TOKEN])
        .await
        .success();
    run(dir.path(), &api, &["session", "login", "--token", "wrong"])
        .await
        .failure();

    run(dir.path(), &api, &["session", "status"])
        .await
        .success()
        .stdout(predicates::str::contains("Not signed in"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unauthorized_request_clears_token() {
    let api = spawn_api().await;
    let dir = TempDir::new().unwrap();

    run(dir.path(), &api, &["members", "list"])
        .await
        .failure()
        .stderr(
            predicates::str::contains("stored token was cleared")
                .and(predicates::str::contains("failed to list members")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_logout_forgets_session() {
    let api = spawn_api().await;
    let dir = TempDir::new().unwrap();

    run(dir.path(), &api, &["session", "login", "--cookie", COOKIE_VALUE])
        .await
        .success();
    run(dir.path(), &api, &["session", "logout"])
        .await
        .success()
        .stdout(predicates::str::contains("Signed out."));

    assert!(!dir.path().join("state").join("session.cookies").exists());
    run(dir.path(), &api, &["session", "check"])
        .await
        .failure()
        .stdout(predicates::str::contains("Not signed in"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reports_summary() {
    let api = spawn_api().await;
    let dir = TempDir::new().unwrap();

    run(dir.path(), &api, &["reports", "summary"])
        .await
        .success()
        .stdout(predicates::str::contains("total wealth"))
        .stdout(predicates::str::contains("120000.00"));
}
