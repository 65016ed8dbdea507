use crate::{
    broker::BrokerConfig, device::DeviceConfig, light::LightConfig, network::WifiConfig,
    ota::OtaConfig, stream::StreamConfig, Config, ConfigError,
};
use std::{fs, path::Path};
use thiserror::Error;

/// Failures when reading or writing a configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("configuration serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

impl Config {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, LoadError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn to_toml_string(&self) -> Result<String, LoadError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// A placeholder record to be hand-edited per deployment.
    ///
    /// Mirrors the masked values a factory-fresh device ships with. It
    /// passes validation, credential content is a human concern.
    pub fn template() -> Self {
        Self {
            device: DeviceConfig {
                module_name: "LED1".into(),
                topic_root: "LedStrip".into(),
            },
            wifi: WifiConfig {
                ssid: "WIFI_SSID_????".into(),
                password: "WIFI_PASSWORD_????".into(),
            },
            broker: BrokerConfig {
                host: "192.168.1.???".into(),
                port: crate::broker::DEFAULT_MQTT_PORT,
                username: "MQTT_USERNAME_??".into(),
                password: "MQTT_PASSWORD_??".into(),
            },
            ota: OtaConfig {
                port: crate::ota::DEFAULT_OTA_PORT,
                hostname_prefix: "OTA_update_H801_".into(),
                update_path: "/firmware".into(),
                username: "OTA_USERNAME".into(),
                password: "OTA_PASSWORD".into(),
            },
            stream: StreamConfig::default(),
            light: LightConfig::default(),
        }
    }
}
