//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roster(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn db_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("roster.db").display())
}

// === Help Tests ===

#[test]
fn test_top_level_help() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_serve_help() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

// === Migrate / Seed Tests ===

#[test]
fn test_migrate_latest_then_noop() {
    let dir = TempDir::new().unwrap();
    let url = db_url(&dir);

    roster(&dir)
        .args(["migrate", "latest", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("applied  20190327122749_create_cohorts"))
        .stdout(predicate::str::contains("applied  20190327123015_create_students"));

    roster(&dir)
        .args(["migrate", "latest", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already up to date"));
}

#[test]
fn test_migrate_status_and_rollback() {
    let dir = TempDir::new().unwrap();
    let url = db_url(&dir);

    roster(&dir)
        .args(["migrate", "status", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("pending"));

    roster(&dir)
        .args(["migrate", "latest", "--database-url", &url])
        .assert()
        .success();

    roster(&dir)
        .args(["migrate", "rollback", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("reverted 20190327123015_create_students"));

    roster(&dir)
        .args(["migrate", "rollback", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to roll back"));
}

#[test]
fn test_seed_after_migrate() {
    let dir = TempDir::new().unwrap();
    let url = db_url(&dir);

    roster(&dir)
        .args(["migrate", "latest", "--database-url", &url])
        .assert()
        .success();

    roster(&dir)
        .args(["seed", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 3 cohorts and 3 students"));
}

#[test]
fn test_seed_without_schema_fails() {
    let dir = TempDir::new().unwrap();

    roster(&dir)
        .env("DATABASE_URL", db_url(&dir))
        .arg("seed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to seed database"));
}
