//! End-to-end tests of the `expense` binary against a temporary data directory

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn stored_expenses(dir: &TempDir) -> Vec<serde_json::Value> {
    let raw = std::fs::read_to_string(dir.path().join("data").join("expenses.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn add_and_list() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Lunch", "12.50", "-d", "2025-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("2025-01-03"))
        .stdout(predicate::str::contains("$12.50"));

    let stored = stored_expenses(&dir);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["category"], "Food");
    assert_eq!(stored[0]["type"], "expense");
    assert_eq!(stored[0]["amount"], 12.5);
}

#[test]
fn add_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Gum", "0.50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be at least"));

    expense(&dir)
        .args(["add", "Gum", "2", "-c", "Pets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn delete_by_short_id() {
    let dir = TempDir::new().unwrap();

    expense(&dir).args(["add", "Taxi", "30", "-c", "Travel"]).assert().success();
    let id = stored_expenses(&dir)[0]["id"].as_str().unwrap().to_string();
    let short = format!("exp-{}", &id.replace('-', "")[..8]);

    expense(&dir)
        .args(["delete", &short])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));

    assert!(stored_expenses(&dir).is_empty());

    expense(&dir)
        .args(["delete", &short])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));
}

#[test]
fn budget_alert_fires_once() {
    let dir = TempDir::new().unwrap();

    expense(&dir).args(["add", "Groceries", "50"]).assert().success();
    expense(&dir)
        .args(["add", "Refund", "10", "-t", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded income"));
    expense(&dir).args(["budget", "set", "Food", "40"]).assert().success();

    expense(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alert: Food budget exceeded"))
        .stdout(predicate::str::contains("EXCEEDED"));

    expense(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alert:").not())
        .stdout(predicate::str::contains("EXCEEDED"));

    let alerts = std::fs::read_to_string(dir.path().join("data").join("alerts.json")).unwrap();
    assert_eq!(alerts.trim(), r#"{"Food":true}"#);
}

#[test]
fn near_limit_alert() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Flight", "85", "-c", "travel"])
        .assert()
        .success();
    expense(&dir)
        .args(["budget", "set", "Travel", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for Travel set to $100.00"));

    expense(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alert: Travel budget almost full"));

    expense(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("near limit"));
}

#[test]
fn malformed_data_falls_back_to_empty() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("expenses.json"), "not json").unwrap();

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Failed to read persisted 'expenses'"))
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn theme_toggles_and_persists() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    expense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme:           dark"));

    expense(&dir)
        .args(["theme", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to light"));
}

#[test]
fn invalid_date_format_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format":"%Q"}"#).unwrap();

    expense(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format '%Q'"))
        .stderr(predicate::str::contains("panicked").not());
}
