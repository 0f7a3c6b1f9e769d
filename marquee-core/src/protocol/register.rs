//! MAX7219 register map

use core::ops::RangeInclusive;

/// Column (digit) registers per device
pub const COLUMNS_PER_DEVICE: usize = 8;

/// MAX7219 register addresses
pub mod reg {
    /// No-op, passes through without touching any register
    pub const NOOP: u8 = 0x00;
    /// First column register
    pub const COLUMN_1: u8 = 0x01;
    /// Last column register
    pub const COLUMN_8: u8 = 0x08;
    /// BCD decode mode (left at its power-on value)
    pub const DECODE_MODE: u8 = 0x09;
    /// LED intensity (0x00-0x0F)
    pub const INTENSITY: u8 = 0x0A;
    /// Number of scanned columns minus one
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// Shutdown / normal operation
    pub const SHUTDOWN: u8 = 0x0C;
    /// Display test (all LEDs on)
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// Shutdown register values
pub mod shutdown {
    /// Power-down, display blanked
    pub const POWER_DOWN: u8 = 0x00;
    /// Normal operation
    pub const NORMAL: u8 = 0x01;
}

/// Display-test register values
pub mod display_test {
    /// Normal display
    pub const OFF: u8 = 0x00;
    /// Every LED on, overrides column data
    pub const ON: u8 = 0x01;
}

/// Column register addresses in order (1..=8)
pub fn column_registers() -> RangeInclusive<u8> {
    reg::COLUMN_1..=reg::COLUMN_8
}

/// Check whether an address is a column register
pub fn is_column_register(address: u8) -> bool {
    column_registers().contains(&address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_registers() {
        assert_eq!(column_registers().count(), COLUMNS_PER_DEVICE);
        assert_eq!(column_registers().next(), Some(0x01));
        assert_eq!(column_registers().last(), Some(0x08));
    }

    #[test]
    fn test_control_registers_are_not_columns() {
        assert!(!is_column_register(reg::NOOP));
        assert!(!is_column_register(reg::INTENSITY));
        assert!(is_column_register(0x05));
    }
}
