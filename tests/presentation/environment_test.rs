use docling_extract::presentation::Environment;

#[test]
fn given_known_names_when_parsing_environment_then_maps_aliases() {
    assert_eq!(
        Environment::try_from("development".to_string()),
        Ok(Environment::Local)
    );
    assert_eq!(Environment::try_from(" PROD ".to_string()), Ok(Environment::Prod));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_fails() {
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_naming_config_file_then_uses_appsettings_prefix() {
    assert_eq!(Environment::Test.config_file_name(), "appsettings.test");
}
