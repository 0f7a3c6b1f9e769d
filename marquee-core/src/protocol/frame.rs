//! Frames and per-device transaction builders

use heapless::Vec;

use super::register::{is_column_register, reg};
use crate::config::{ChainLength, MAX_CHAIN_LENGTH};

/// Errors from building chain transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Target device is beyond the end of the chain
    DeviceOutOfRange,
    /// Address is not a column register (1-8)
    InvalidColumn,
}

/// One (address, data) pair as shifted into a single device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Register address, sent first
    pub address: u8,
    /// Register value
    pub data: u8,
}

impl Frame {
    /// Harmless pass-through frame for devices not being addressed
    pub const NOOP: Frame = Frame::new(reg::NOOP, 0x00);

    /// Create a frame
    pub const fn new(address: u8, data: u8) -> Self {
        Self { address, data }
    }

    /// Check whether this frame leaves its device untouched
    pub const fn is_noop(&self) -> bool {
        self.address == reg::NOOP
    }

    /// Wire bytes, address first
    pub const fn to_bytes(self) -> [u8; 2] {
        [self.address, self.data]
    }
}

/// One frame per device, slot 0 first on the wire
pub type Transaction = Vec<Frame, MAX_CHAIN_LENGTH>;

/// Build the transaction that writes `value` into column `register` of one device
///
/// The real frame sits at slot `target`; every other slot carries a no-op.
pub fn column_transaction(
    target: usize,
    chain_length: ChainLength,
    register: u8,
    value: u8,
) -> Result<Transaction, ProtocolError> {
    if target >= chain_length.get() {
        return Err(ProtocolError::DeviceOutOfRange);
    }
    if !is_column_register(register) {
        return Err(ProtocolError::InvalidColumn);
    }

    Ok((0..chain_length.get())
        .map(|slot| {
            if slot == target {
                Frame::new(register, value)
            } else {
                Frame::NOOP
            }
        })
        .collect())
}

/// Build the transaction that writes the same register on every device
pub fn broadcast(chain_length: ChainLength, register: u8, value: u8) -> Transaction {
    (0..chain_length.get())
        .map(|_| Frame::new(register, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n: u8) -> ChainLength {
        ChainLength::new(n).unwrap()
    }

    #[test]
    fn test_noop_frame() {
        assert!(Frame::NOOP.is_noop());
        assert_eq!(Frame::NOOP.to_bytes(), [0x00, 0x00]);
        assert!(!Frame::new(0x01, 0x00).is_noop());
    }

    #[test]
    fn test_target_first_device() {
        let tx = column_transaction(0, chain(3), 0x08, 0xAB).unwrap();
        assert_eq!(
            tx.as_slice(),
            &[Frame::new(0x08, 0xAB), Frame::NOOP, Frame::NOOP]
        );
    }

    #[test]
    fn test_target_middle_device() {
        let tx = column_transaction(1, chain(4), 0x03, 0x42).unwrap();
        assert_eq!(
            tx.as_slice(),
            &[Frame::NOOP, Frame::new(0x03, 0x42), Frame::NOOP, Frame::NOOP]
        );
    }

    #[test]
    fn test_single_device_chain_has_no_padding() {
        let tx = column_transaction(0, chain(1), 0x01, 0xFF).unwrap();
        assert_eq!(tx.as_slice(), &[Frame::new(0x01, 0xFF)]);
    }

    #[test]
    fn test_zero_value_is_still_a_real_write() {
        // A blank column must address the register, not send a no-op
        let tx = column_transaction(1, chain(2), 0x04, 0x00).unwrap();
        assert_eq!(tx[1], Frame::new(0x04, 0x00));
        assert!(!tx[1].is_noop());
    }

    #[test]
    fn test_rejects_bad_target_and_register() {
        assert_eq!(
            column_transaction(2, chain(2), 0x01, 0),
            Err(ProtocolError::DeviceOutOfRange)
        );
        assert_eq!(
            column_transaction(0, chain(2), 0x00, 0),
            Err(ProtocolError::InvalidColumn)
        );
        assert_eq!(
            column_transaction(0, chain(2), reg::INTENSITY, 0),
            Err(ProtocolError::InvalidColumn)
        );
    }

    #[test]
    fn test_broadcast() {
        let tx = broadcast(chain(3), reg::SHUTDOWN, 0x01);
        assert_eq!(tx.len(), 3);
        assert!(tx.iter().all(|f| *f == Frame::new(0x0C, 0x01)));
    }

    #[test]
    fn test_full_chain_fits() {
        let tx = broadcast(chain(MAX_CHAIN_LENGTH as u8), reg::INTENSITY, 0x07);
        assert_eq!(tx.len(), MAX_CHAIN_LENGTH);
    }
}
