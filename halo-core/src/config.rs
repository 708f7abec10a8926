//! Panel configuration
//!
//! All values are compile-time defaults matching the panel's known-good
//! timing. Hosts that keep settings in flash can store the config as
//! postcard-serialized bytes (`serde` feature).

use halo_hal::BusTiming;
use halo_protocol::{LinkConfig, PANEL_ADDRESS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::session::{Session, BRIGHTNESS_STEP};

/// Maximum encoded size of a [`PanelConfig`]
pub const MAX_CONFIG_SIZE: usize = 32;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Stored bytes do not decode to a config
    Corrupt,
}

/// Panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// 7-bit bus address of the panel
    pub address: u8,
    /// Delay after every line transition (us)
    pub bit_delay_us: u32,
    /// Gap between the preamble and the payload (us)
    pub preamble_gap_us: u32,
    /// Sequences sent per push
    pub push_repeats: u8,
    /// Gap after each sequence of a push (ms)
    pub push_gap_ms: u16,
    /// Brightness at power-on
    pub initial_brightness: u8,
    /// Brightness change per button press
    pub brightness_step: u8,
    /// Time the panel needs after power-on before it accepts frames (ms)
    pub boot_delay_ms: u16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            address: PANEL_ADDRESS,
            bit_delay_us: BusTiming::STANDARD.delay_us,
            preamble_gap_us: 33,
            push_repeats: 8,
            push_gap_ms: 2,
            initial_brightness: 0xFF,
            brightness_step: BRIGHTNESS_STEP,
            boot_delay_ms: 800,
        }
    }
}

impl PanelConfig {
    /// Bit-bang timing
    pub fn timing(&self) -> BusTiming {
        BusTiming {
            delay_us: self.bit_delay_us,
        }
    }

    /// Frame link settings
    ///
    /// The inter-preamble delay is one bus delay unit.
    pub fn link(&self) -> LinkConfig {
        LinkConfig {
            address: self.address,
            unit_delay_us: self.bit_delay_us,
            preamble_gap_us: self.preamble_gap_us,
            repeats: self.push_repeats,
            repeat_gap_us: self.push_gap_ms as u32 * 1_000,
        }
    }

    /// Session at power-on
    pub fn session(&self) -> Session {
        Session::new(self.initial_brightness, self.brightness_step)
    }

    /// Encode into `buf`, returning the used part
    #[cfg(feature = "serde")]
    pub fn encode<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::BufferTooSmall)
    }

    /// Decode from stored bytes
    #[cfg(feature = "serde")]
    pub fn decode(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_link_matches_protocol_defaults() {
        assert_eq!(PanelConfig::default().link(), LinkConfig::default());
    }

    #[test]
    fn test_default_timing() {
        assert_eq!(PanelConfig::default().timing(), BusTiming::STANDARD);
    }

    #[test]
    fn test_session_from_config() {
        let config = PanelConfig {
            initial_brightness: 0x40,
            brightness_step: 32,
            ..PanelConfig::default()
        };
        let mut session = config.session();
        assert_eq!(session.brightness(), 0x40);
        session.brighter();
        assert_eq!(session.brightness(), 0x60);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_encode_decode() {
        let config = PanelConfig {
            push_repeats: 3,
            boot_delay_ms: 1200,
            ..PanelConfig::default()
        };
        let mut buf = [0u8; MAX_CONFIG_SIZE];
        let used = config.encode(&mut buf).unwrap().len();
        assert_eq!(PanelConfig::decode(&buf[..used]), Ok(config));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_encode_small_buffer() {
        let mut buf = [0u8; 2];
        assert_eq!(
            PanelConfig::default().encode(&mut buf),
            Err(ConfigError::BufferTooSmall)
        );
    }
}
