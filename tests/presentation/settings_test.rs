use std::time::Duration;

use docling_extract::presentation::config::{ConverterEngine, DEFAULT_PORT};
use docling_extract::presentation::{Environment, Settings};

#[test]
fn given_no_overrides_when_loading_settings_then_uses_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.converter.engine, ConverterEngine::DoclingCli);
    assert_eq!(settings.converter.docling_binary, "docling");
    assert!(settings.converter.docling_args.is_empty());
    assert_eq!(settings.converter.timeout(), Duration::from_secs(300));
    assert_eq!(settings.converter.max_concurrent, 1);
    assert!(settings.staging.directory.is_none());
    assert_eq!(settings.limits.max_upload_bytes(), 50 * 1024 * 1024);
}

#[test]
fn given_default_settings_when_created_then_binds_loopback_on_default_port() {
    let settings = Settings::default();

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, DEFAULT_PORT);
    assert_eq!(DEFAULT_PORT, 3200);
}
