#![cfg_attr(feature = "no-std", no_std)]

//! Static configuration table for an H801 class LED strip controller.
//!
//! Holds the values the firmware reads once at startup (WiFi credentials,
//! MQTT broker endpoint, OTA update endpoint, optional UDP stream parameters
//! and light tuning) and derives the MQTT topic set from the device identity.
//! The subsystems consuming these values (WiFi stack, MQTT client, OTA
//! updater, UDP listener, light driver) live elsewhere.

pub mod broker;
pub mod device;
pub mod error;
pub mod light;
#[cfg(feature = "std")]
mod loader;
pub mod network;
pub mod ota;
pub mod stream;
pub mod topics;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;
#[cfg(feature = "std")]
pub use loader::LoadError;

#[cfg(feature = "std")]
pub type String<const N: usize> = std::string::String;
#[cfg(feature = "no-std")]
pub type String<const N: usize> = heapless::String<N>;

/// Short identifier such as a module name, topic root or username.
pub type NameString = String<32>;
pub type SsidString = String<32>;
pub type SecretString = String<64>;
pub type HostString = String<64>;
pub type PathString = String<64>;
/// A fully derived MQTT topic.
pub type TopicString = String<96>;

/// The whole configuration record for one device.
///
/// Every value is fixed at configuration time and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct Config {
    pub device: device::DeviceConfig,
    pub wifi: network::WifiConfig,
    pub broker: broker::BrokerConfig,
    pub ota: ota::OtaConfig,
    #[serde(default)]
    pub stream: stream::StreamConfig,
    #[serde(default)]
    pub light: light::LightConfig,
}

impl Config {
    /// Checks the record before anything consumes it.
    ///
    /// Credential content is deliberately not checked, a record full of
    /// masked placeholder values is still a valid template.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.device.validate()?;
        self.light.validate()?;
        self.stream.validate()?;
        Ok(())
    }
}

pub(crate) fn owned_str<const N: usize>(value: &str) -> Result<String<N>, ConfigError> {
    #[cfg(feature = "std")]
    {
        Ok(value.to_string())
    }
    #[cfg(feature = "no-std")]
    {
        String::try_from(value).map_err(|_| ConfigError::ValueTooLong)
    }
}

pub(crate) fn validate_transition(field: &'static str, seconds: f32) -> Result<(), ConfigError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(ConfigError::InvalidTransitionTime(field));
    }
    Ok(())
}
