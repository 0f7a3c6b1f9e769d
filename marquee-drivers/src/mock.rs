//! Test doubles for the transport and delay seams

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use marquee_core::protocol::Frame;
use marquee_core::traits::SerialTransport;

/// Everything a transport was asked to do, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Select,
    Byte(u8),
    Deselect,
}

/// Transport that records traffic instead of driving pins
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub events: Vec<Event>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regroup the recorded bytes into frames, one `Vec` per transaction
    ///
    /// Panics if the traffic is not well-formed (unbalanced select or an odd
    /// byte count inside a transaction).
    pub fn transactions(&self) -> Vec<Vec<Frame>> {
        let mut transactions = Vec::new();
        let mut current: Option<Vec<u8>> = None;

        for event in &self.events {
            match *event {
                Event::Select => {
                    assert!(current.is_none(), "select inside open transaction");
                    current = Some(Vec::new());
                }
                Event::Byte(b) => current
                    .as_mut()
                    .expect("byte outside transaction")
                    .push(b),
                Event::Deselect => {
                    let bytes = current.take().expect("deselect without select");
                    assert!(bytes.len() % 2 == 0, "odd byte count in transaction");
                    transactions.push(
                        bytes
                            .chunks(2)
                            .map(|pair| Frame::new(pair[0], pair[1]))
                            .collect(),
                    );
                }
            }
        }

        assert!(current.is_none(), "transaction left open");
        transactions
    }

    /// Bytes sent, ignoring chip-select
    pub fn bytes(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Byte(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SerialTransport for RecordingTransport {
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

/// Transport whose bus dies after a fixed number of bytes
#[derive(Debug)]
pub struct FailingTransport {
    pub bytes_left: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

impl SerialTransport for FailingTransport {
    type Error = BusFault;

    fn select(&mut self) -> Result<(), BusFault> {
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), BusFault> {
        Ok(())
    }

    fn send_byte(&mut self, _byte: u8) -> Result<(), BusFault> {
        if self.bytes_left == 0 {
            return Err(BusFault);
        }
        self.bytes_left -= 1;
        Ok(())
    }
}

/// Delay that only counts
#[derive(Debug, Default)]
pub struct MockDelay {
    pub calls: usize,
    pub total_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }
}
