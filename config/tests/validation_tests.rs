use ledstrip_config::{device::DeviceConfig, Config, ConfigError};

#[test]
fn template_passes_validation() {
    Config::template().validate().expect("template is valid");
}

#[test]
fn rejects_inverted_color_temperature_bounds() {
    let mut config = Config::template();
    config.light.min_color_temp = 501;

    match config.validate() {
        Err(ConfigError::ColorTempRange { min, max }) => {
            assert_eq!(min, 501);
            assert_eq!(max, 500);
        }
        other => panic!("expected color temperature error, got {other:?}"),
    }
}

#[test]
fn equal_color_temperature_bounds_are_fine() {
    let mut config = Config::template();
    config.light.min_color_temp = 300;
    config.light.max_color_temp = 300;

    config.validate().expect("equal bounds are valid");
}

#[test]
fn rejects_empty_module_name() {
    let mut config = Config::template();
    config.device.module_name = String::new();

    assert_eq!(
        config.validate(),
        Err(ConfigError::EmptyField("module name"))
    );
}

#[test]
fn rejects_separator_in_module_name() {
    let err = DeviceConfig::new("LED/1", "LedStrip").expect_err("error");
    assert_eq!(err, ConfigError::InvalidCharacter("module name"));
}

#[test]
fn rejects_mqtt_wildcards() {
    let err = DeviceConfig::new("LED+1", "LedStrip").expect_err("error");
    assert_eq!(err, ConfigError::InvalidCharacter("module name"));

    let err = DeviceConfig::new("LED1", "LedStrip/#").expect_err("error");
    assert_eq!(err, ConfigError::InvalidCharacter("topic root"));
}

#[test]
fn rejects_non_printable_names() {
    let err = DeviceConfig::new("LED\u{7}1", "LedStrip").expect_err("error");
    assert_eq!(err, ConfigError::InvalidCharacter("module name"));

    let err = DeviceConfig::new("LED 1", "LedStrip").expect_err("error");
    assert_eq!(err, ConfigError::InvalidCharacter("module name"));
}

#[test]
fn rejects_dangling_separators_in_topic_root() {
    for root in ["/LedStrip", "LedStrip/", "Led//Strip"] {
        let err = DeviceConfig::new("LED1", root).expect_err("error");
        assert_eq!(err, ConfigError::MisplacedSeparator("topic root"));
    }
}

#[test]
fn rejects_bad_transition_times() {
    let mut config = Config::template();
    config.light.transition_time_s = -0.5;
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidTransitionTime("light"))
    );

    let mut config = Config::template();
    config.stream.transition_time_s = f32::NAN;
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidTransitionTime("stream"))
    );
}

#[test]
fn zero_transition_time_is_fine() {
    let mut config = Config::template();
    config.light.transition_time_s = 0.0;
    config.stream.transition_time_s = 0.0;

    config.validate().expect("instant transitions are valid");
}

#[test]
fn masked_placeholder_credentials_are_accepted() {
    let config = Config::template();

    // The record doubles as a hand-edited template, so credential content
    // is never inspected.
    assert!(config.wifi.ssid.contains("????"));
    assert!(config.broker.host.contains('?'));
    config.validate().expect("placeholders are valid");
}
