use crate::{error::ConfigError, validate_transition};
use core::net::Ipv4Addr;
use serde::{Deserialize, Serialize};

/// Parameters for the optional UDP/HDMI ambient stream.
///
/// An all-zero multicast address or a zero port means the feature is not
/// used; consumers must check [`StreamConfig::enabled`] before binding a
/// socket. The packet layout itself is external, only the offset of the RGB
/// bytes within a packet is configured here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
#[serde(default)]
pub struct StreamConfig {
    /// Multicast group the stream is received on, as raw octets.
    pub multicast_addr: [u8; 4],
    pub port: u16,
    /// Byte offset of the red channel inside a stream packet.
    pub rgb_offset: usize,
    /// Seconds to fade between consecutive stream colors.
    pub transition_time_s: f32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            multicast_addr: [0; 4],
            port: 0,
            rgb_offset: 0,
            transition_time_s: 0.2,
        }
    }
}

impl StreamConfig {
    /// Whether the stream feature is configured at all.
    pub fn enabled(&self) -> bool {
        self.port != 0 && self.multicast_addr != [0; 4]
    }

    pub fn multicast_ip(&self) -> Ipv4Addr {
        let [a, b, c, d] = self.multicast_addr;
        Ipv4Addr::new(a, b, c, d)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        validate_transition("stream", self.transition_time_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_parameters_mean_disabled() {
        assert!(!StreamConfig::default().enabled());
    }

    #[test]
    fn both_address_and_port_are_required() {
        let mut stream = StreamConfig {
            multicast_addr: [239, 255, 0, 1],
            ..StreamConfig::default()
        };
        assert!(!stream.enabled());

        stream.port = 7777;
        assert!(stream.enabled());

        stream.multicast_addr = [0; 4];
        assert!(!stream.enabled());
    }
}
