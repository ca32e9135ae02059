use std::fs;

use hongik_timer::config::{ApiConfig, AppConfig, ConfigError, LoggingConfig};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Test that AppConfig::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = AppConfig::default();

    assert_eq!(config.api.base_url, "http://localhost:8080/api");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = AppConfig::config_path();
    assert!(path.ends_with("hongik-timer/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_full_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://timer.example.com/api"
timeout_seconds = 10
connect_timeout_seconds = 2

[logging]
level = "debug"
"#,
    );

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(
        config,
        AppConfig {
            api: ApiConfig {
                base_url: "https://timer.example.com/api".to_string(),
                timeout_seconds: 10,
                connect_timeout_seconds: 2,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    );
}

/// Missing fields fall back to their defaults.
#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api]\ntimeout_seconds = 60\n");

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.api.timeout_seconds, 60);
    assert_eq!(config.api.base_url, "http://localhost:8080/api");
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api\nbase_url = ");

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api]\ntimeout_seconds = \"soon\"\n");

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_non_http_base_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api]\nbase_url = \"ftp://timer.example.com\"\n");

    match AppConfig::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("base_url"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_zero_timeout_is_rejected() {
    let mut config = AppConfig::default();
    config.api.connect_timeout_seconds = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = AppConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: AppConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
