use carebook::config::{validate_config, CONFIG_ENV_VAR};
use carebook::{AppConfig, AppError};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_env_var_points_at_config_file() {
    let file = write_config(
        r#"{
            "brand_name": "Sunrise Clinic",
            "catalog": {
                "doctors": [
                    { "id": 7, "name": "Dr. Asha Rao", "specialty": "ENT", "availability": "Mon, Thu" }
                ],
                "time_slots": ["08:00 AM", "08:30 AM"]
            },
            "timings": { "submission_delay_ms": 300 }
        }"#,
    );
    std::env::set_var(CONFIG_ENV_VAR, file.path());

    let config = AppConfig::load();
    std::env::remove_var(CONFIG_ENV_VAR);

    let config = config.unwrap();
    assert_eq!(config.brand_name, "Sunrise Clinic");
    assert_eq!(config.catalog.doctors.len(), 1);
    assert_eq!(config.catalog.doctors[0].availability_line(), "Available: Mon, Thu");
    assert_eq!(config.catalog.time_slots.len(), 2);
    assert_eq!(config.timings.submission_delay_ms, 300);
    // Unset fields fall back to defaults
    assert_eq!(config.timings.success_dismiss_ms, 2000);
}

#[test]
#[serial]
fn test_missing_file_named_by_env_var_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(CONFIG_ENV_VAR, dir.path().join("absent.json"));

    let result = AppConfig::load();
    std::env::remove_var(CONFIG_ENV_VAR);

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
    assert!(!err.is_pii_safe());
    assert_eq!(err.to_safe_string(), "Could not read a local file");
}

#[test]
#[serial]
fn test_malformed_json_is_reported() {
    let file = write_config("{ \"brand_name\": ");
    std::env::set_var(CONFIG_ENV_VAR, file.path());

    let result = AppConfig::load();
    std::env::remove_var(CONFIG_ENV_VAR);

    assert!(matches!(result, Err(AppError::Json(_))));
}

#[test]
#[serial]
fn test_invalid_catalog_is_rejected_on_load() {
    let file = write_config(
        r#"{
            "catalog": {
                "doctors": [
                    { "id": 1, "name": "Dr. A", "specialty": "X", "availability": "Mon" },
                    { "id": 1, "name": "Dr. B", "specialty": "Y", "availability": "Tue" }
                ]
            }
        }"#,
    );
    std::env::set_var(CONFIG_ENV_VAR, file.path());

    let result = AppConfig::load();
    std::env::remove_var(CONFIG_ENV_VAR);

    match result {
        Err(AppError::Config(msg)) => assert!(msg.contains("duplicate doctor id 1")),
        other => panic!("expected config error, got {:?}", other.map(|c| c.brand_name)),
    }
}

#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(validate_config(&config).is_ok());
    assert_eq!(config.catalog.doctors.len(), 6);
    assert_eq!(config.catalog.time_slots.len(), 12);
    assert_eq!(config.timings.submission_delay().as_millis(), 1500);
    assert_eq!(config.timings.success_dismiss().as_millis(), 2000);
}
