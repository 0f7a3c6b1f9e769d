//! MAX7219 daisy chain driver
//!
//! Drives N cascaded MAX7219 matrix controllers sharing one chip-select line.
//! Every transaction shifts exactly one 16-bit frame per device; the frame
//! sent first ends up in the device furthest from the controller.
//!
//! # Start-up
//!
//! [`Max7219Chain::initialize`] must run before any column write. The chip
//! powers up in shutdown with scan limit 0, so skipping it leaves the matrix
//! dark or showing a single row.

pub mod transport;

pub use transport::SpiTransport;

use marquee_core::config::{ChainLength, DeviceSettings};
use marquee_core::protocol::{
    broadcast, column_registers, display_test, reg, render_plan, shutdown,
};
use marquee_core::scroll::ScrollBuffer;
use marquee_core::traits::SerialTransport;

/// Chain driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChainError<E> {
    /// Underlying transport failed
    Transport(E),
    /// Buffer was sized for a different chain length
    LengthMismatch,
}

impl<E> From<E> for ChainError<E> {
    fn from(e: E) -> Self {
        ChainError::Transport(e)
    }
}

/// A chain of identical MAX7219 devices on one transport
pub struct Max7219Chain<T> {
    transport: T,
    chain_length: ChainLength,
}

impl<T: SerialTransport> Max7219Chain<T> {
    /// Create a chain driver
    ///
    /// Sends nothing; call [`initialize`](Self::initialize) next.
    pub fn new(transport: T, chain_length: ChainLength) -> Self {
        Self {
            transport,
            chain_length,
        }
    }

    /// Number of devices in the chain
    pub fn chain_length(&self) -> ChainLength {
        self.chain_length
    }

    /// Program every device with the same settings and wake it up
    ///
    /// Four transactions: intensity, scan limit, shutdown off, display test off.
    pub fn initialize(&mut self, settings: &DeviceSettings) -> Result<(), ChainError<T::Error>> {
        self.write_all(reg::INTENSITY, settings.intensity)?;
        self.write_all(reg::SCAN_LIMIT, settings.scan_limit)?;
        self.write_all(reg::SHUTDOWN, shutdown::NORMAL)?;
        self.write_all(reg::DISPLAY_TEST, display_test::OFF)
    }

    /// Blank every column of every device
    pub fn clear(&mut self) -> Result<(), ChainError<T::Error>> {
        for register in column_registers() {
            self.write_all(register, 0x00)?;
        }
        Ok(())
    }

    /// Put every device into power-down mode
    ///
    /// Column data is kept; `initialize` wakes the chain again.
    pub fn shutdown(&mut self) -> Result<(), ChainError<T::Error>> {
        self.write_all(reg::SHUTDOWN, shutdown::POWER_DOWN)
    }

    /// Send the whole buffer to the chain
    pub fn render(&mut self, buffer: &ScrollBuffer) -> Result<(), ChainError<T::Error>> {
        if buffer.chain_length() != self.chain_length {
            return Err(ChainError::LengthMismatch);
        }

        for step in render_plan(buffer) {
            self.transport.transaction(&step.frames)?;
        }
        Ok(())
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give back the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Write one register on every device in a single transaction
    fn write_all(&mut self, register: u8, value: u8) -> Result<(), ChainError<T::Error>> {
        let frames = broadcast(self.chain_length, register, value);
        self.transport.transaction(&frames)?;
        Ok(())
    }
}
