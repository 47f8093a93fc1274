use docling_extract::infrastructure::observability::TracingConfig;
use docling_extract::presentation::config::{ENVIRONMENT_VAR, Environment, LoggingSettings};

#[test]
fn given_json_logging_setting_when_building_config_then_enables_json() {
    let config = TracingConfig::from_settings(&LoggingSettings { json: true }, Environment::Prod);

    assert!(config.json_format);
    assert_eq!(config.environment, "prod");
}

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}

#[test]
fn given_default_config_when_created_then_reads_app_environment_variable() {
    let expected = std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "local".to_string());

    let config = TracingConfig::default();

    assert_eq!(ENVIRONMENT_VAR, "APP_ENVIRONMENT");
    assert_eq!(config.environment, expected);
}
