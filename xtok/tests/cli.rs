//! CLI end-to-end tests
//!
//! These tests run the xtok binary against the fixture documents of the
//! tokenizer crate and scratch files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the shared fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("xmltok")
        .join("crates")
        .join("xmltok-lex")
        .join("tests")
        .join("fixtures")
}

/// Get the path to the xtok binary
fn xtok_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_xtok"))
}

/// Build a command isolated from any user or system configuration.
fn xtok(home: &TempDir) -> Command {
    let mut cmd = Command::new(xtok_bin());
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("XTOK_VERBOSE")
        .env_remove("XTOK_CONFIG")
        .env_remove("XTOK_NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    xtok(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokens")));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    xtok(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xtok"));
}

#[test]
fn test_cli_tokens_text() {
    let home = TempDir::new().unwrap();
    xtok(&home)
        .arg("tokens")
        .arg(fixtures_dir().join("reminder.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "TokenKind:           PROLOG, data: <?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        ))
        .stdout(predicate::str::contains("TokenKind:             TEXT, data: John\n"))
        .stdout(predicate::str::contains("TokenKind: SELF_CLOSING_TAG, data: end\n"))
        .stdout(predicate::str::ends_with("TokenKind:        CLOSE_TAG, data: note\n"));
}

#[test]
fn test_cli_tokens_json() {
    let home = TempDir::new().unwrap();
    let output = xtok(&home)
        .args(["tokens", "--format", "json"])
        .arg(fixtures_dir().join("reminder.xml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 19);
    assert_eq!(records[2]["kind"], "OPEN_TAG");
    assert_eq!(records[2]["content"], "note");
}

#[test]
fn test_cli_tokens_multiple_files_with_summary() {
    let home = TempDir::new().unwrap();
    xtok(&home)
        .args(["tokens", "--summary"])
        .arg(fixtures_dir().join("reminder.xml"))
        .arg(fixtures_dir().join("library.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("reminder.xml: 19 tokens\n\nTokenKind:"))
        .stdout(predicate::str::contains("library.xml: 32 tokens\n"));
}

#[test]
fn test_cli_stats() {
    let home = TempDir::new().unwrap();
    xtok(&home)
        .arg("stats")
        .arg(fixtures_dir().join("library.xml"))
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"OPEN_TAG\s+10\n").unwrap())
        .stdout(predicate::str::is_match(r"SELF_CLOSING_TAG\s+2\n").unwrap())
        .stdout(predicate::str::is_match(r"total\s+32\n").unwrap());
}

#[test]
fn test_cli_missing_file_fails() {
    let home = TempDir::new().unwrap();
    xtok(&home)
        .args(["tokens", "absent.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.xml doesn't exist"));
}

#[test]
fn test_cli_wrong_extension_fails() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("notes.txt"), "<note/>").unwrap();
    xtok(&home)
        .args(["stats", "notes.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("isn't .xml file"));
}

#[test]
fn test_cli_unterminated_fails_after_earlier_files() {
    let home = TempDir::new().unwrap();
    xtok(&home)
        .arg("tokens")
        .arg(fixtures_dir().join("reminder.xml"))
        .arg(fixtures_dir().join("unterminated.xml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("data: note"))
        .stderr(predicate::str::contains("unterminated comment starting at line 4, column 5"));
}

#[test]
fn test_cli_config_sets_format() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("xtok.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    xtok(&home)
        .arg("tokens")
        .arg(fixtures_dir().join("library.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"kind\":\"PROLOG\""));
}

#[test]
fn test_cli_flag_overrides_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    xtok(&home)
        .arg("--config")
        .arg(&config)
        .args(["tokens", "--format", "text"])
        .arg(fixtures_dir().join("library.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("TokenKind:"));
}

#[test]
fn test_cli_missing_config_fails() {
    let home = TempDir::new().unwrap();
    xtok(&home)
        .args(["--config", "nowhere.toml", "stats"])
        .arg(fixtures_dir().join("library.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_cli_init_then_refuse() {
    let home = TempDir::new().unwrap();
    xtok(&home).arg("init").assert().success();
    assert!(home.path().join("xtok.toml").exists());

    xtok(&home)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
