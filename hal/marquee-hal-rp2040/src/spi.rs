//! Blocking SPI master for RP2040
//!
//! Wraps an embassy-rp blocking SPI peripheral. `blocking_write` spins on the
//! PL022 busy flag before returning, which is the transfer-complete wait the
//! MAX7219 chain relies on before chip-select is released.

use embassy_rp::spi::{
    Blocking, ClkPin, Config, Error as RpSpiError, Instance, MosiPin, Phase, Polarity, Spi,
};
use embassy_rp::Peri;
use marquee_hal::spi::{self, BitOrder, SpiBus, SpiConfig};

/// Errors from SPI setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiSetupError {
    /// The PL022 only shifts MSB first
    UnsupportedBitOrder,
    /// Frequency of zero requested
    InvalidFrequency,
}

/// Convert a `marquee-hal` configuration to an embassy-rp one
pub fn to_rp_config(config: &SpiConfig) -> Result<Config, SpiSetupError> {
    if config.bit_order != BitOrder::MsbFirst {
        return Err(SpiSetupError::UnsupportedBitOrder);
    }
    if config.frequency == 0 {
        return Err(SpiSetupError::InvalidFrequency);
    }

    let (polarity, phase): (spi::Polarity, spi::Phase) = config.mode.into();

    let mut rp_config = Config::default();
    rp_config.frequency = config.frequency;
    rp_config.polarity = match polarity {
        spi::Polarity::IdleLow => Polarity::IdleLow,
        spi::Polarity::IdleHigh => Polarity::IdleHigh,
    };
    rp_config.phase = match phase {
        spi::Phase::CaptureOnFirstTransition => Phase::CaptureOnFirstTransition,
        spi::Phase::CaptureOnSecondTransition => Phase::CaptureOnSecondTransition,
    };
    Ok(rp_config)
}

/// Transmit-only blocking SPI master
pub struct RpSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> RpSpi<'d, T> {
    /// Create a TX-only SPI master on the given clock and MOSI pins
    ///
    /// The display chain is write-only, so no MISO pin is claimed.
    pub fn new_txonly(
        peripheral: Peri<'d, T>,
        clk: Peri<'d, impl ClkPin<T> + 'd>,
        mosi: Peri<'d, impl MosiPin<T> + 'd>,
        config: &SpiConfig,
    ) -> Result<Self, SpiSetupError> {
        let rp_config = to_rp_config(config)?;
        Ok(Self {
            spi: Spi::new_blocking_txonly(peripheral, clk, mosi, rp_config),
        })
    }
}

impl<T: Instance> SpiBus for RpSpi<'_, T> {
    type Error = RpSpiError;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.spi.blocking_write(data)
    }
}
