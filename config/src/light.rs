use crate::{error::ConfigError, validate_transition};
use serde::{Deserialize, Serialize};

/// Color rendering tuning for the strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
#[serde(default)]
pub struct LightConfig {
    /// Coolest supported color temperature, in mireds.
    pub min_color_temp: u16,
    /// Warmest supported color temperature, in mireds.
    pub max_color_temp: u16,
    /// Seconds to fade between color, brightness or white level changes.
    pub transition_time_s: f32,
    pub rgb_mixing: RgbMixing,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            min_color_temp: 153,
            max_color_temp: 500,
            transition_time_s: 0.5,
            rgb_mixing: RgbMixing::NEUTRAL,
        }
    }
}

impl LightConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.min_color_temp > self.max_color_temp {
            return Err(ConfigError::ColorTempRange {
                min: self.min_color_temp,
                max: self.max_color_temp,
            });
        }

        validate_transition("light", self.transition_time_s)
    }
}

/// Per-channel scale applied to RGB output, 255 meaning no attenuation.
///
/// Lower one channel to rebalance a strip whose colors do not mix evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct RgbMixing(pub [u8; 3]);

impl RgbMixing {
    pub const NEUTRAL: Self = Self([255; 3]);

    pub fn red(&self) -> u8 {
        self.0[0]
    }

    pub fn green(&self) -> u8 {
        self.0[1]
    }

    pub fn blue(&self) -> u8 {
        self.0[2]
    }
}

impl Default for RgbMixing {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
