use querytail_domain::config::OverflowPolicy;
use querytail_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;
use std::path::PathBuf;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_config_is_valid() {
    let config = Config::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.tail.poll_interval_ms, 500);
    assert_eq!(config.tail.reopen_interval_ms, 1000);
    assert!(config.tail.follow_rotation);
    assert_eq!(config.hub.subscriber_queue_capacity, 256);
    assert_eq!(config.hub.overflow_policy, OverflowPolicy::Disconnect);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.tail.log_path, PathBuf::from("mosdns.log"));
}

// ============================================================================
// TOML parsing
// ============================================================================

#[test]
fn test_partial_toml_overrides_only_given_fields() {
    let raw = r#"
        [server]
        web_port = 9000

        [tail]
        log_path = "/var/log/mosdns.log"
        follow_rotation = false

        [hub]
        overflow_policy = "drop_event"
    "#;

    let config = Config::from_toml(raw).unwrap();

    assert_eq!(config.server.web_port, 9000);
    assert_eq!(config.server.ui_dir, "ui");
    assert_eq!(config.tail.log_path, PathBuf::from("/var/log/mosdns.log"));
    assert!(!config.tail.follow_rotation);
    assert_eq!(config.tail.poll_interval_ms, 500);
    assert_eq!(config.hub.overflow_policy, OverflowPolicy::DropEvent);
    assert_eq!(config.hub.subscriber_queue_capacity, 256);
}

#[test]
fn test_unknown_overflow_policy_is_rejected() {
    let raw = r#"
        [hub]
        overflow_policy = "block"
    "#;
    assert!(Config::from_toml(raw).is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let config = Config::load(Some(&path), CliOverrides::default()).unwrap();

    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_load_missing_file_is_read_error() {
    let result = Config::load(
        Some("/definitely/not/here/querytail.toml"),
        CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_load_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server\nweb_port = ").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let result = Config::load(Some(&path), CliOverrides::default());

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

// ============================================================================
// CLI overrides
// ============================================================================

#[test]
fn test_cli_overrides_win_over_file() {
    let mut config = Config::from_toml("[server]\nweb_port = 9000").unwrap();

    config.apply_overrides(CliOverrides {
        log_file: Some(PathBuf::from("/tmp/resolver.log")),
        bind_address: Some("127.0.0.1".to_string()),
        web_port: Some(9100),
        ui_dir: Some("dist".to_string()),
        log_level: Some("warn".to_string()),
    });

    assert_eq!(config.server.web_port, 9100);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.server.ui_dir, "dist");
    assert_eq!(config.tail.log_path, PathBuf::from("/tmp/resolver.log"));
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_empty_overrides_change_nothing() {
    let mut config = Config::default();
    config.apply_overrides(CliOverrides::default());
    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.logging.level, "info");
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.web_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_intervals() {
    let mut config = Config::default();
    config.tail.poll_interval_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.tail.reopen_interval_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_queue_capacity() {
    let mut config = Config::default();
    config.hub.subscriber_queue_capacity = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_empty_log_path() {
    let mut config = Config::default();
    config.tail.log_path = PathBuf::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_log_level_case_insensitive() {
    let mut config = Config::default();
    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());

    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());
}
