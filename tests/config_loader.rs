use std::fs;
use std::time::Duration;

use stockroom::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.source.min_delay_ms, 300);
    assert_eq!(config.source.max_delay_ms, 800);
    assert_eq!(config.source.failure_rate, 0.07);
    assert_eq!(config.catalog.item_count, 60);
    assert_eq!(config.catalog.seed, 42);
    assert_eq!(config.storage.path, None);
    assert!(!config.storage.ephemeral);
    assert_eq!(config.ui.low_stock_threshold, 10);
    assert_eq!(config.ui.toast_duration(), Duration::from_millis(2200));
    assert_eq!(config.ui.search_debounce(), Duration::from_millis(300));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("stockroom/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let (_dir, path) = write_config(
        r#"
[source]
failure_rate = 0.5

[storage]
ephemeral = true

[ui]
toast_ms = 5000
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.source.failure_rate, 0.5);
    assert_eq!(config.source.min_delay_ms, 300);
    assert!(config.storage.ephemeral);
    assert_eq!(config.ui.toast_ms, 5000);
    assert_eq!(config.ui.toast_duration(), Duration::from_secs(5));
    assert_eq!(config.catalog.item_count, 60);
}

#[test]
fn test_fetch_options_follow_source_section() {
    let (_dir, path) = write_config(
        r#"
[source]
min_delay_ms = 10
max_delay_ms = 20
failure_rate = 0.0
"#,
    );

    let opts = Config::load_from(&path).unwrap().source.fetch_options();
    assert_eq!(opts.min_delay, Duration::from_millis(10));
    assert_eq!(opts.max_delay, Duration::from_millis(20));
    assert_eq!(opts.failure_rate, 0.0);
    assert!(!opts.force_error);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[source\nfailure_rate = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_inverted_delays_fail_validation() {
    let (_dir, path) = write_config("[source]\nmin_delay_ms = 900\nmax_delay_ms = 100\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_out_of_range_failure_rate_fails_validation() {
    let mut config = Config::default();
    config.source.failure_rate = 1.5;
    assert!(config.validate().is_err());
    config.source.failure_rate = -0.1;
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_items_fails_validation() {
    let mut config = Config::default();
    config.catalog.item_count = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("item_count"));
}
