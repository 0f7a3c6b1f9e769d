//! SPI bus abstractions
//!
//! Provides the SPI master trait and bus configuration for chip-specific
//! HALs. The display chain never reads back, so only the transmit side is
//! modelled.

/// SPI bus master (transmit only)
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    ///
    /// Must not return until every byte has left the shift register: callers
    /// release chip-select right after this returns.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write(&[byte])
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
    /// Bit order on the wire
    pub bit_order: BitOrder,
}

impl Default for SpiConfig {
    /// MAX7219 framing: mode 0, MSB first, 1 MHz
    fn default() -> Self {
        Self {
            frequency: 1_000_000, // 1 MHz
            mode: Mode::Mode0,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

impl SpiConfig {
    /// Default framing at a specific clock frequency
    pub fn with_frequency(frequency: u32) -> Self {
        Self {
            frequency,
            ..Self::default()
        }
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

/// Order in which the bits of each byte are shifted out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}
