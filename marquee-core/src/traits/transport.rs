//! Serial transport for daisy-chained display drivers

use crate::protocol::Frame;

/// Byte-oriented serial link to a chain of identical slave devices
///
/// Every logical transaction is bracketed by [`select`](Self::select) and
/// [`deselect`](Self::deselect). Devices latch whatever was shifted into them
/// on deselect, all at the same time.
///
/// `send_byte` blocks until the hardware reports the byte as sent. There is
/// no timeout: a stalled bus hangs the caller.
pub trait SerialTransport {
    /// Error type for transport operations
    type Error;

    /// Begin a transaction (assert chip-select)
    fn select(&mut self) -> Result<(), Self::Error>;

    /// End a transaction (release chip-select, devices latch)
    fn deselect(&mut self) -> Result<(), Self::Error>;

    /// Transmit one byte, MSB first
    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Transmit one (address, data) pair, address first
    fn send_pair(&mut self, address: u8, data: u8) -> Result<(), Self::Error> {
        self.send_byte(address)?;
        self.send_byte(data)
    }

    /// Send a complete transaction: select, every frame in order, deselect
    fn transaction(&mut self, frames: &[Frame]) -> Result<(), Self::Error> {
        self.select()?;
        for frame in frames {
            self.send_pair(frame.address, frame.data)?;
        }
        self.deselect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Select,
        Byte(u8),
        Deselect,
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl SerialTransport for Recorder {
        type Error = Infallible;

        fn select(&mut self) -> Result<(), Infallible> {
            self.events.push(Event::Select);
            Ok(())
        }

        fn deselect(&mut self) -> Result<(), Infallible> {
            self.events.push(Event::Deselect);
            Ok(())
        }

        fn send_byte(&mut self, byte: u8) -> Result<(), Infallible> {
            self.events.push(Event::Byte(byte));
            Ok(())
        }
    }

    #[test]
    fn test_send_pair_address_first() {
        let mut bus = Recorder::default();
        bus.send_pair(0x0A, 0x07).unwrap();
        assert_eq!(bus.events, vec![Event::Byte(0x0A), Event::Byte(0x07)]);
    }

    #[test]
    fn test_transaction_is_bracketed() {
        let mut bus = Recorder::default();
        bus.transaction(&[Frame::new(0x03, 0xAA), Frame::NOOP]).unwrap();

        assert_eq!(
            bus.events,
            vec![
                Event::Select,
                Event::Byte(0x03),
                Event::Byte(0xAA),
                Event::Byte(0x00),
                Event::Byte(0x00),
                Event::Deselect,
            ]
        );
    }

    #[test]
    fn test_empty_transaction_still_latches() {
        let mut bus = Recorder::default();
        bus.transaction(&[]).unwrap();
        assert_eq!(bus.events, vec![Event::Select, Event::Deselect]);
    }
}
