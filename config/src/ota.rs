use crate::{
    device::DeviceConfig, error::ConfigError, owned_str, HostString, NameString, PathString,
    SecretString,
};
use core::fmt::Write;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OTA_PORT: u16 = 80;

/// Parameters for the HTTP firmware update endpoint the device exposes.
///
/// Credentials travel in cleartext, keep update access on a trusted network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct OtaConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Prefix the per-device update hostname is built from.
    pub hostname_prefix: NameString,
    pub update_path: PathString,
    pub username: NameString,
    pub password: SecretString,
}

impl OtaConfig {
    pub fn new(
        port: u16,
        hostname_prefix: &str,
        update_path: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            port,
            hostname_prefix: owned_str::<32>(hostname_prefix)?,
            update_path: owned_str::<64>(update_path)?,
            username: owned_str::<32>(username)?,
            password: owned_str::<64>(password)?,
        })
    }

    /// Hostname the updater announces for this device.
    pub fn hostname(&self, device: &DeviceConfig) -> Result<HostString, ConfigError> {
        let mut hostname = HostString::new();
        write!(hostname, "{}{}", self.hostname_prefix, device.module_name)
            .map_err(|_| ConfigError::ValueTooLong)?;
        Ok(hostname)
    }
}

fn default_port() -> u16 {
    DEFAULT_OTA_PORT
}
