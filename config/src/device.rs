use crate::{error::ConfigError, owned_str, NameString, TopicString};
use core::fmt::Write;
use serde::{Deserialize, Serialize};

/// Identity of one physical controller on the MQTT side.
///
/// The derived base topic must be unique per device, two controllers sharing
/// a base topic will shadow each other on the broker. Uniqueness cannot be
/// checked here, only the shape of the names can.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Name of this module, e.g. `LED1`. One topic segment, no separators.
    pub module_name: NameString,
    /// Root topic segment shared by a fleet of controllers, e.g. `LedStrip`.
    pub topic_root: NameString,
}

impl DeviceConfig {
    pub fn new(module_name: &str, topic_root: &str) -> Result<Self, ConfigError> {
        let config = Self {
            module_name: owned_str::<32>(module_name)?,
            topic_root: owned_str::<32>(topic_root)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Base topic under which all feature topics for this device nest.
    pub fn base_topic(&self) -> Result<TopicString, ConfigError> {
        let mut topic = TopicString::new();
        write!(topic, "{}/{}", self.topic_root, self.module_name)
            .map_err(|_| ConfigError::ValueTooLong)?;
        Ok(topic)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        validate_chars("module name", &self.module_name)?;
        if self.module_name.contains('/') {
            return Err(ConfigError::InvalidCharacter("module name"));
        }

        validate_chars("topic root", &self.topic_root)?;
        if self.topic_root.split('/').any(str::is_empty) {
            return Err(ConfigError::MisplacedSeparator("topic root"));
        }

        Ok(())
    }
}

/// Printable ASCII only, and never the MQTT wildcards `+` and `#`.
fn validate_chars(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyField(field));
    }

    for c in value.chars() {
        if !c.is_ascii_graphic() || c == '+' || c == '#' {
            return Err(ConfigError::InvalidCharacter(field));
        }
    }

    Ok(())
}
