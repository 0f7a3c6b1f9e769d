//! Configuration type definitions
//!
//! Everything here is fixed at build time: the firmware embeds its config
//! file, so changing the chain length or the message means rebuilding.

use heapless::String;

use crate::protocol::COLUMNS_PER_DEVICE;
use crate::text::MAX_MESSAGE_LEN;

/// Maximum number of cascaded devices
pub const MAX_CHAIN_LENGTH: usize = 16;

/// Chain length used when none is configured
pub const DEFAULT_CHAIN_LENGTH: u8 = 8;

/// Maximum intensity register value
pub const MAX_INTENSITY: u8 = 0x0F;

/// Maximum scan-limit register value (all 8 columns enabled)
pub const MAX_SCAN_LIMIT: u8 = 0x07;

/// Default hold time per scroll step in microseconds
pub const DEFAULT_SCROLL_DELAY_US: u32 = 14_000;

/// Default SPI clock
pub const DEFAULT_BUS_FREQUENCY_HZ: u32 = 1_000_000;

/// MAX7219 serial interface limit
pub const MAX_BUS_FREQUENCY_HZ: u32 = 10_000_000;

/// Message shown when none is configured
pub const DEFAULT_MESSAGE: &str = "HELLO WORLD! ";

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Chain length is zero or above `MAX_CHAIN_LENGTH`
    InvalidChainLength,
    /// Intensity above `MAX_INTENSITY`
    InvalidIntensity,
    /// Scan limit above `MAX_SCAN_LIMIT`
    InvalidScanLimit,
    /// Scroll delay of zero
    InvalidScrollDelay,
    /// Bus frequency of zero or above `MAX_BUS_FREQUENCY_HZ`
    InvalidFrequency,
}

/// Number of cascaded devices in the display chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChainLength(u8);

impl ChainLength {
    /// Create a chain length (1..=`MAX_CHAIN_LENGTH` devices)
    pub const fn new(devices: u8) -> Result<Self, ConfigError> {
        if devices == 0 || devices as usize > MAX_CHAIN_LENGTH {
            Err(ConfigError::InvalidChainLength)
        } else {
            Ok(Self(devices))
        }
    }

    /// Number of devices
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Number of physical columns across the whole chain
    pub const fn columns(self) -> usize {
        self.get() * COLUMNS_PER_DEVICE
    }
}

impl Default for ChainLength {
    fn default() -> Self {
        Self(DEFAULT_CHAIN_LENGTH)
    }
}

impl TryFrom<u8> for ChainLength {
    type Error = ConfigError;

    fn try_from(devices: u8) -> Result<Self, Self::Error> {
        Self::new(devices)
    }
}

/// Register values programmed into every device at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceSettings {
    /// Intensity register value (0x00-0x0F)
    pub intensity: u8,
    /// Scan-limit register value (active columns minus one)
    pub scan_limit: u8,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            intensity: 0x07,
            scan_limit: MAX_SCAN_LIMIT,
        }
    }
}

impl DeviceSettings {
    /// Create validated device settings
    pub fn new(intensity: u8, scan_limit: u8) -> Result<Self, ConfigError> {
        let settings = Self {
            intensity,
            scan_limit,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check register values are within the device's ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.intensity > MAX_INTENSITY {
            return Err(ConfigError::InvalidIntensity);
        }
        if self.scan_limit > MAX_SCAN_LIMIT {
            return Err(ConfigError::InvalidScanLimit);
        }
        Ok(())
    }
}

/// Display chain configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Number of cascaded matrices
    pub chain_length: ChainLength,
    /// Per-device register settings
    pub settings: DeviceSettings,
    /// Hold time after every scroll step (microseconds)
    pub scroll_delay_us: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chain_length: ChainLength::default(),
            settings: DeviceSettings::default(),
            scroll_delay_us: DEFAULT_SCROLL_DELAY_US,
        }
    }
}

/// Serial bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// SPI clock frequency in Hz
    pub frequency_hz: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_BUS_FREQUENCY_HZ,
        }
    }
}

/// Complete firmware configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MarqueeConfig {
    /// Display chain settings
    pub display: DisplayConfig,
    /// Bus settings
    pub bus: BusConfig,
    /// Message to scroll
    pub message: String<MAX_MESSAGE_LEN>,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        let mut message = String::new();
        let _ = message.push_str(DEFAULT_MESSAGE);
        Self {
            display: DisplayConfig::default(),
            bus: BusConfig::default(),
            message,
        }
    }
}

impl MarqueeConfig {
    /// Check every numeric setting is within range
    ///
    /// The message is validated separately against a glyph table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.settings.validate()?;
        if self.display.scroll_delay_us == 0 {
            return Err(ConfigError::InvalidScrollDelay);
        }
        if self.bus.frequency_hz == 0 || self.bus.frequency_hz > MAX_BUS_FREQUENCY_HZ {
            return Err(ConfigError::InvalidFrequency);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_length_bounds() {
        assert_eq!(ChainLength::new(0), Err(ConfigError::InvalidChainLength));
        assert_eq!(ChainLength::new(1).unwrap().get(), 1);
        assert_eq!(ChainLength::new(16).unwrap().get(), 16);
        assert_eq!(ChainLength::new(17), Err(ConfigError::InvalidChainLength));
    }

    #[test]
    fn test_chain_columns() {
        let chain = ChainLength::new(2).unwrap();
        assert_eq!(chain.columns(), 16);
        assert_eq!(ChainLength::default().columns(), 64);
    }

    #[test]
    fn test_device_settings_ranges() {
        assert!(DeviceSettings::new(0x0F, 7).is_ok());
        assert_eq!(
            DeviceSettings::new(0x10, 7),
            Err(ConfigError::InvalidIntensity)
        );
        assert_eq!(
            DeviceSettings::new(0x07, 8),
            Err(ConfigError::InvalidScanLimit)
        );
    }

    #[test]
    fn test_defaults_match_reference_board() {
        let config = MarqueeConfig::default();
        assert_eq!(config.display.chain_length.get(), 8);
        assert_eq!(config.display.settings.intensity, 0x07);
        assert_eq!(config.display.settings.scan_limit, 0x07);
        assert_eq!(config.display.scroll_delay_us, 14_000);
        assert_eq!(config.message.as_str(), DEFAULT_MESSAGE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_delay() {
        let mut config = MarqueeConfig::default();
        config.display.scroll_delay_us = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidScrollDelay));
    }

    #[test]
    fn test_validate_rejects_fast_bus() {
        let mut config = MarqueeConfig::default();
        config.bus.frequency_hz = 20_000_000;
        assert_eq!(config.validate(), Err(ConfigError::InvalidFrequency));
    }
}
