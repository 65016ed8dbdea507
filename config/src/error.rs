use thiserror::Error;

/// Reasons a configuration record is rejected at load time.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub enum ConfigError {
    /// A string value does not fit the fixed storage reserved for it.
    #[error("value too long for its storage")]
    ValueTooLong,

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// Only printable ASCII is accepted, and MQTT wildcards never are.
    #[error("{0} contains a non-printable or reserved character")]
    InvalidCharacter(&'static str),

    #[error("{0} must not start or end with '/'")]
    MisplacedSeparator(&'static str),

    #[error("color temperature bounds inverted: min {min} > max {max}")]
    ColorTempRange { min: u16, max: u16 },

    #[error("{0} transition time must be finite and not negative")]
    InvalidTransitionTime(&'static str),
}
