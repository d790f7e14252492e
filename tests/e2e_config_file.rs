/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests run the binary inside a temporary working directory so that
/// config auto-discovery only sees the file each test writes.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn validator_in(dir: &Path, submission: &str) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("pom-validator");
    cmd.current_dir(dir)
        .arg("-r")
        .arg(fixture("reference-pom.xml"))
        .arg(fixture(submission));
    cmd
}

// ============================================================================
// Auto-discovery
// ============================================================================

#[test]
fn test_discovered_config_selects_json() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("pom-validator.config.yml"),
        "format: json\n",
    );

    validator_in(temp_dir.path(), "pom-matching.xml")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"submissions\""));
}

#[test]
fn test_discovered_config_selects_locale() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("pom-validator.config.yml"),
        "locale: pt-PT\n",
    );

    validator_in(temp_dir.path(), "pom-with-extra-deps.xml")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Dependências a mais, que não existem no enunciado:",
        ));
}

#[test]
fn test_discovered_config_accepts_submission_tests() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("pom-validator.config.yml"),
        "accept_submission_tests: true\n",
    );

    validator_in(temp_dir.path(), "pom-without-tests.xml")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("  - junit:junit:4.13.1"));
}

#[test]
fn test_cli_disables_submission_tests_accepted_by_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("pom-validator.config.yml"),
        "accept_submission_tests: true\n",
    );

    validator_in(temp_dir.path(), "pom-without-tests.xml")
        .arg("--no-accept-submission-tests")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("✅ Valid"));
}

#[test]
fn test_no_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    validator_in(temp_dir.path(), "pom-without-tests.xml")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("✅ Valid"));
}

// ============================================================================
// CLI precedence
// ============================================================================

#[test]
fn test_cli_format_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("pom-validator.config.yml"),
        "format: json\n",
    );

    validator_in(temp_dir.path(), "pom-matching.xml")
        .args(["--format", "text"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Summary: 1 submission(s)"));
}

#[test]
fn test_cli_locale_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("pom-validator.config.yml"),
        "locale: pt\n",
    );

    validator_in(temp_dir.path(), "pom-with-extra-deps.xml")
        .args(["--locale", "en"])
        .assert()
        .stdout(predicate::str::contains(
            "Extra dependencies not present in the assignment:",
        ));
}

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ci.yml");
    write_config(&config_path, "format: json\n");

    validator_in(temp_dir.path(), "pom-matching.xml")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"summary\""));
}

// ============================================================================
// Config errors
// ============================================================================

#[test]
fn test_explicit_config_not_found() {
    let temp_dir = TempDir::new().unwrap();

    validator_in(temp_dir.path(), "pom-matching.xml")
        .args(["--config", "missing.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_invalid_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("pom-validator.config.yml"),
        "format: [[[broken",
    );

    validator_in(temp_dir.path(), "pom-matching.xml")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_invalid_format_in_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("pom-validator.config.yml"),
        "format: markdown\n",
    );

    validator_in(temp_dir.path(), "pom-matching.xml")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_unknown_config_field_warns() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("pom-validator.config.yml"),
        "strict: true\n",
    );

    validator_in(temp_dir.path(), "pom-matching.xml")
        .assert()
        .code(0)
        .stderr(predicate::str::contains(
            "Unknown config field 'strict' will be ignored",
        ));
}
