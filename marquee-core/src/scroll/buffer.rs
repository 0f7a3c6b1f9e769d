//! Column buffer for the whole display chain

use core::ops::Index;

use heapless::Vec;

use crate::config::{ChainLength, MAX_CHAIN_LENGTH};
use crate::protocol::{is_column_register, COLUMNS_PER_DEVICE};

/// Column capacity of the largest supported chain
pub const MAX_COLUMNS: usize = MAX_CHAIN_LENGTH * COLUMNS_PER_DEVICE;

/// One byte per physical column across every cascaded device
///
/// The buffer is split into 8-byte segments, one per device in chain order.
/// Byte `c` of a segment is column register `c + 1` of that device.
/// Index 0 is the oldest column, the last index the newest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollBuffer {
    columns: Vec<u8, MAX_COLUMNS>,
    chain_length: ChainLength,
}

impl ScrollBuffer {
    /// Create a zero-filled buffer sized for `chain_length` devices
    pub fn new(chain_length: ChainLength) -> Self {
        Self {
            columns: core::iter::repeat(0).take(chain_length.columns()).collect(),
            chain_length,
        }
    }

    /// Drop the oldest column and append `column` as the newest
    pub fn shift_in(&mut self, column: u8) {
        let last = self.columns.len() - 1;
        self.columns.copy_within(1.., 0);
        self.columns[last] = column;
    }

    /// Blank every column
    pub fn clear(&mut self) {
        self.columns.iter_mut().for_each(|c| *c = 0);
    }

    /// Chain this buffer was sized for
    pub fn chain_length(&self) -> ChainLength {
        self.chain_length
    }

    /// Total number of columns (devices * 8)
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false: a chain has at least one device
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All columns, oldest first
    pub fn as_slice(&self) -> &[u8] {
        &self.columns
    }

    /// The 8 columns belonging to one device
    pub fn segment(&self, device: usize) -> Option<&[u8]> {
        let start = device.checked_mul(COLUMNS_PER_DEVICE)?;
        self.columns.get(start..start + COLUMNS_PER_DEVICE)
    }

    /// Value for column register `register` (1-8) of `device`
    pub fn column(&self, device: usize, register: u8) -> Option<u8> {
        if !is_column_register(register) {
            return None;
        }
        self.segment(device).map(|segment| segment[register as usize - 1])
    }
}

impl Index<usize> for ScrollBuffer {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.columns[index]
    }
}
