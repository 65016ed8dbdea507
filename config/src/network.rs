use crate::{error::ConfigError, owned_str, SecretString, SsidString};
use serde::{Deserialize, Serialize};

/// Credentials for the wireless network the controller joins at boot.
///
/// Read once by the WiFi stack, never mutated. Content is not validated, a
/// freshly generated template carries masked placeholders that only a human
/// can fill in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct WifiConfig {
    pub ssid: SsidString,
    pub password: SecretString,
}

impl WifiConfig {
    pub fn new(ssid: &str, password: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            ssid: owned_str::<32>(ssid)?,
            password: owned_str::<64>(password)?,
        })
    }
}
