use voicedesk::infrastructure::observability::TracingConfig;
use voicedesk::presentation::config::LoggingSettings;

#[test]
fn given_logging_settings_when_building_config_then_uses_level_as_filter() {
    let settings = LoggingSettings {
        level: "warn,voicedesk=info".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&settings, "Test");

    assert_eq!(config.default_filter, "warn,voicedesk=info");
    assert_eq!(config.environment, "Test");
    assert!(config.json_format);
}

#[test]
fn given_default_config_when_created_then_environment_and_filter_are_set() {
    let config = TracingConfig::default();

    assert!(!config.environment.is_empty());
    assert!(config.default_filter.contains("voicedesk"));
}
