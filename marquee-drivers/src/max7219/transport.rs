//! SPI + chip-select transport

use marquee_core::traits::SerialTransport;
use marquee_hal::{OutputPin, SpiBus};

/// Serial transport over an SPI master and an active-low chip-select pin
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI: SpiBus, CS: OutputPin> SpiTransport<SPI, CS> {
    /// Create a transport, releasing chip-select
    pub fn new(spi: SPI, mut cs: CS) -> Self {
        cs.set_high();
        Self { spi, cs }
    }

    /// Give back the bus and pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI: SpiBus, CS: OutputPin> SerialTransport for SpiTransport<SPI, CS> {
    type Error = SPI::Error;

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low();
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high();
        Ok(())
    }

    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.spi.write_byte(byte)
    }
}
