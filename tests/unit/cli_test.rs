//! Integration tests for the domain-monitor CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// CLI isolated from the caller's config files and credentials
fn domain_monitor(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("domain-monitor"));
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("VIRUSTOTAL_API_KEY")
        .env_remove("KEITARO_API_KEY")
        .env_remove("KEITARO_URL")
        .env_remove("TELEGRAM_BOT_TOKEN");
    cmd
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    domain_monitor(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("domain-monitor"));
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    domain_monitor(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Check domains against VirusTotal"));
}

#[test]
fn test_no_args_shows_info() {
    let home = TempDir::new().unwrap();
    domain_monitor(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("domain-monitor v"));
}

#[test]
fn test_version_json() {
    let home = TempDir::new().unwrap();
    domain_monitor(&home)
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_check_requires_domain() {
    let home = TempDir::new().unwrap();
    domain_monitor(&home).arg("check").assert().failure();
}

#[test]
fn test_offline_check_without_key() {
    let home = TempDir::new().unwrap();
    domain_monitor(&home)
        .args(["check", "google.com", "unknown.example", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Checking: google.com"))
        .stdout(predicate::str::contains("Status: SAFE"))
        .stdout(predicate::str::contains("2. Checking: unknown.example"))
        .stdout(predicate::str::contains("Risk Score: 30% (Medium)"))
        .stdout(predicate::str::contains("offline placeholder"))
        .stdout(predicate::str::contains("1 safe, 1 unsafe, 0 failed"));
}

#[test]
fn test_offline_check_strict_fails_on_unsafe() {
    let home = TempDir::new().unwrap();
    domain_monitor(&home)
        .args(["check", "unknown.example", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 unsafe domain(s)"));
}

#[test]
fn test_offline_check_json() {
    let home = TempDir::new().unwrap();
    let output = domain_monitor(&home)
        .args(["--json", "check", "github.com"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["checked"], 1);
    assert_eq!(json["results"][0]["verdict"]["status"], "SAFE");
    assert_eq!(json["results"][0]["verdict"]["source"], "offline");
}

#[test]
fn test_list_without_keitaro_fails() {
    let home = TempDir::new().unwrap();
    domain_monitor(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Keitaro is not configured"));
}

#[test]
fn test_malformed_config_fails() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("domain-monitor.toml"), "[scan\n").unwrap();
    domain_monitor(&home)
        .args(["check", "google.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn test_bot_without_token_fails() {
    let home = TempDir::new().unwrap();
    domain_monitor(&home)
        .arg("bot")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no Telegram bot token configured"));
}
