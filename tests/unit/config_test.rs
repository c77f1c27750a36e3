//! Tests for configuration loading

use std::fs;
use std::path::Path;
use std::time::Duration;

use domain_monitor::config::{AppConfig, DEFAULT_TELEGRAM_URL, DEFAULT_VIRUSTOTAL_URL};
use domain_monitor::error::ConfigError;
use domain_monitor::paths;
use serial_test::serial;
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = AppConfig::default();
    assert!(config.virustotal.api_key.is_empty());
    assert!(!config.virustotal.has_key());
    assert_eq!(config.virustotal.base_url, DEFAULT_VIRUSTOTAL_URL);
    assert!(!config.keitaro.is_configured());
    assert_eq!(config.telegram.base_url, DEFAULT_TELEGRAM_URL);
    assert_eq!(config.telegram.poll_timeout_secs, 60);
    assert_eq!(config.scan.pacing(), Duration::from_secs(1));
    assert!(!config.scan.fallback_on_error);
}

#[test]
fn test_whitespace_key_is_no_key() {
    let mut config = AppConfig::default();
    config.virustotal.api_key = "   ".to_string();
    assert!(!config.virustotal.has_key());
}

// =============================================================================
// FILE PARSING
// =============================================================================

#[test]
fn test_partial_file_keeps_defaults() {
    let config = AppConfig::from_toml(
        r#"
[virustotal]
api_key = "vt-key"

[keitaro]
api_key = "k-key"
base_url = "https://tracker.example/admin_api/v1"
"#,
        Path::new("test.toml"),
    )
    .unwrap();

    assert_eq!(config.virustotal.api_key, "vt-key");
    assert_eq!(config.virustotal.base_url, DEFAULT_VIRUSTOTAL_URL);
    assert!(config.keitaro.is_configured());
    assert_eq!(config.telegram.poll_timeout_secs, 60);
    assert_eq!(config.scan.pacing_ms, 1000);
}

#[test]
fn test_scan_section() {
    let config = AppConfig::from_toml(
        "[scan]\npacing_ms = 2000\nfallback_on_error = true\n",
        Path::new("test.toml"),
    )
    .unwrap();
    assert_eq!(config.scan.pacing(), Duration::from_secs(2));
    assert!(config.scan.fallback_on_error);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let err = AppConfig::from_toml("[scan]\npacing_ms = \"soon\"\n", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");
    let err = AppConfig::from_file(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

// =============================================================================
// ENVIRONMENT OVERRIDES
// =============================================================================

#[test]
fn test_env_overrides_file() {
    let mut config = AppConfig::from_toml(
        "[virustotal]\napi_key = \"from-file\"\n[keitaro]\nbase_url = \"https://file.example\"\n",
        Path::new("test.toml"),
    )
    .unwrap();

    config.apply_env(|key| match key {
        "VIRUSTOTAL_API_KEY" => Some("from-env".to_string()),
        "KEITARO_URL" => Some(String::new()),
        "TELEGRAM_BOT_TOKEN" => Some("123:abc".to_string()),
        _ => None,
    });

    assert_eq!(config.virustotal.api_key, "from-env");
    assert_eq!(config.keitaro.base_url, "https://file.example");
    assert_eq!(config.telegram.bot_token, "123:abc");
}

#[test]
#[serial]
fn test_load_discovers_local_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        paths::local_config(temp.path()),
        "[keitaro]\nbase_url = \"https://local.example\"\n",
    )
    .unwrap();

    let saved = std::env::var("KEITARO_URL").ok();
    // SAFETY: serialized with other env-mutating tests
    unsafe { std::env::remove_var("KEITARO_URL") };

    let config = AppConfig::load(None, temp.path()).unwrap();
    assert_eq!(config.keitaro.base_url, "https://local.example");

    if let Some(v) = saved {
        // SAFETY: serialized with other env-mutating tests
        unsafe { std::env::set_var("KEITARO_URL", v) };
    }
}

#[test]
#[serial]
fn test_load_explicit_path_wins() {
    let temp = TempDir::new().unwrap();
    fs::write(paths::local_config(temp.path()), "[scan]\npacing_ms = 1\n").unwrap();
    let explicit = temp.path().join("other.toml");
    fs::write(&explicit, "[scan]\npacing_ms = 2\n").unwrap();

    let config = AppConfig::load(Some(&explicit), temp.path()).unwrap();
    assert_eq!(config.scan.pacing_ms, 2);
}
