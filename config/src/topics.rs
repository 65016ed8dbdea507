use crate::{device::DeviceConfig, error::ConfigError, TopicString};
use core::fmt::Write;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

const STATE_SUFFIX: &str = "json_status";
const COMMAND_SUFFIX: &str = "json_set";
const AVAILABILITY_SUFFIX: &str = "active";

/// Light features that each publish state and accept commands on their own
/// topic pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub enum Feature {
    Rgb,
    White,
    Combined,
    Settings,
}

impl Feature {
    /// Topic segment for this feature. Stable, these names are part of the
    /// broker-facing contract.
    pub fn topic_segment(&self) -> &'static str {
        match self {
            Feature::Rgb => "rgb",
            Feature::White => "white",
            Feature::Combined => "combined",
            Feature::Settings => "settings",
        }
    }
}

/// The derived pub/sub channel names for one device.
///
/// Derivation is deterministic from the device identity and the set is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct TopicSet {
    base: TopicString,
}

impl TopicSet {
    pub fn derive(device: &DeviceConfig) -> Result<Self, ConfigError> {
        device.validate()?;
        Ok(Self {
            base: device.base_topic()?,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Topic the device reports `feature` state on.
    pub fn state(&self, feature: Feature) -> Result<TopicString, ConfigError> {
        self.feature_topic(feature, STATE_SUFFIX)
    }

    /// Topic the device accepts `feature` commands on.
    pub fn command(&self, feature: Feature) -> Result<TopicString, ConfigError> {
        self.feature_topic(feature, COMMAND_SUFFIX)
    }

    /// Topic the device marks itself alive on.
    pub fn availability(&self) -> Result<TopicString, ConfigError> {
        let mut topic = TopicString::new();
        write!(topic, "{}/{}", self.base, AVAILABILITY_SUFFIX)
            .map_err(|_| ConfigError::ValueTooLong)?;
        Ok(topic)
    }

    fn feature_topic(&self, feature: Feature, suffix: &str) -> Result<TopicString, ConfigError> {
        let mut topic = TopicString::new();
        write!(topic, "{}/{}/{}", self.base, feature.topic_segment(), suffix)
            .map_err(|_| ConfigError::ValueTooLong)?;
        Ok(topic)
    }
}
