use crate::{error::ConfigError, owned_str, HostString, NameString, SecretString};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MQTT_PORT: u16 = 1883;

/// Connection parameters for the MQTT broker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct BrokerConfig {
    /// IPv4 literal or hostname of the broker.
    pub host: HostString,
    #[serde(default = "default_port")]
    pub port: u16,
    pub username: NameString,
    pub password: SecretString,
}

impl BrokerConfig {
    pub fn new(
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            host: owned_str::<64>(host)?,
            port,
            username: owned_str::<32>(username)?,
            password: owned_str::<64>(password)?,
        })
    }
}

fn default_port() -> u16 {
    DEFAULT_MQTT_PORT
}
