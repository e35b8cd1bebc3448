//! Tests for ManagerConfig parsing and validation.

use dropzone::{ConfigError, ManagerConfig};
use std::io::Write;

#[test]
fn test_empty_document_is_default() {
    let config = ManagerConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ManagerConfig::default());
}

#[test]
fn test_partial_document_keeps_other_defaults() {
    let config = ManagerConfig::from_json_str(r#"{"coalesce_scroll": false}"#).unwrap();
    assert!(config.coalesce_pointer_moves);
    assert!(!config.coalesce_scroll);
    assert_eq!(config.slow_hit_test_ms, ManagerConfig::default().slow_hit_test_ms);
}

#[test]
fn test_immediate_disables_coalescing() {
    let config = ManagerConfig::immediate();
    assert!(!config.coalesce_pointer_moves);
    assert!(!config.coalesce_scroll);
    assert!(config.validate().is_ok());
}

#[test]
fn test_negative_threshold_is_rejected() {
    let err = ManagerConfig::from_json_str(r#"{"slow_hit_test_ms": -1.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("slow_hit_test_ms"));
}

#[test]
fn test_malformed_json_is_rejected() {
    let err = ManagerConfig::from_json_str("{ coalesce_scroll: }").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"coalesce_pointer_moves": false, "slow_hit_test_ms": 4.5}}"#).unwrap();

    let config = ManagerConfig::load(file.path()).unwrap();
    assert!(!config.coalesce_pointer_moves);
    assert!(config.coalesce_scroll);
    assert_eq!(config.slow_hit_test_ms, 4.5);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ManagerConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_config_serializes_every_field() {
    let json = serde_json::to_value(ManagerConfig::default()).unwrap();
    assert_eq!(json["coalesce_pointer_moves"], true);
    assert_eq!(json["coalesce_scroll"], true);
    assert!(json["slow_hit_test_ms"].is_number());
}
