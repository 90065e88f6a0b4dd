//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    for var in [
        "TEXTFILTER_MAX_LENGTH",
        "TEXTFILTER_LOG_LEVEL",
        "TEXTFILTER_FORMAT",
        "TEXTFILTER_WARN_ON_HIGH_DENSITY",
        "TEXTFILTER_DENSITY_THRESHOLD",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let work = tmp.path().join("work");
    fs::create_dir_all(tmp.path().join(".git")).unwrap();
    fs::create_dir_all(&work).unwrap();
    let json = info_json(&work);

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["max_length"], 10_000);
    assert_eq!(json["config"]["format"], "markdown");
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textfilter.toml"), "max_length = 250\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["max_length"], 250);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".textfilter.toml"), "got: {reported}");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(tmp.path().join("textfilter.toml"), r#"format = "html""#).unwrap();

    let json = info_json(&nested);
    assert_eq!(json["config"]["format"], "html");
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textfilter.yaml"),
        "warn_on_high_density: true\ndensity_threshold: 12.5\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["warn_on_high_density"], true);
    assert_eq!(json["config"]["density_threshold"], 12.5);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textfilter.json"),
        r#"{"log_level": "error", "disable_input_limit": true}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
    assert!(json["config"]["input_limit"].is_null());
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(tmp.path().join(".textfilter.toml"), "max_length = 10\n").unwrap();
    fs::write(sub_dir.join(".textfilter.toml"), "max_length = 20\n").unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(json["config"]["max_length"], 20, "closer config should win");
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textfilter.toml"), "max_length = 10\n").unwrap();
    fs::write(tmp.path().join("textfilter.toml"), "max_length = 30\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["max_length"], 30);
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textfilter.toml"), "max_length = 10\n").unwrap();

    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "max_length = 99\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["max_length"], 99);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("override.toml"), "got: {reported}");
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textfilter.toml"), "max_length = 10\n").unwrap();

    let output = cmd()
        .env("TEXTFILTER_MAX_LENGTH", "77")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["max_length"], 77);
}

#[test]
fn configured_max_length_applies_to_clean() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textfilter.toml"), "max_length = 3\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "clean", "--text", "abcd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "ERROR: Text is too long. Please shorten it",
        ));
}

#[test]
fn configured_format_applies_to_clean() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textfilter.toml"), r#"format = "json""#).unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "clean", "--text", "a  b"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["cleaned_text"], "a b");
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textfilter.toml"),
        "this is not valid toml [[[",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn wrong_value_type_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textfilter.toml"),
        r#"max_length = "lots""#,
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textfilter.toml"),
        "max_length = 42\nsome_future_option = true\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["max_length"], 42);
}

// =============================================================================
// Boundary Marker
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let work = repo.join("work");
    fs::create_dir_all(repo.join(".git")).unwrap();
    fs::create_dir_all(&work).unwrap();
    fs::write(tmp.path().join(".textfilter.toml"), "max_length = 10\n").unwrap();

    let json = info_json(&work);
    assert_eq!(
        json["config"]["max_length"], 10_000,
        "config above the .git boundary should not be found"
    );
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join(".git")).unwrap();
    fs::write(tmp.path().join(".textfilter.toml"), "max_length = 11\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["max_length"], 11);
}
