//! Hardware driver implementations
//!
//! This crate drives a chain of MAX7219 matrices through the traits defined
//! in `marquee-core` and `marquee-hal`:
//!
//! - SPI + chip-select serial transport
//! - Chain programming, clearing and full-buffer rendering
//! - The scroll loop that feeds a message through the buffer

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod marquee;
pub mod max7219;

#[cfg(test)]
pub(crate) mod mock;

pub use marquee::{Marquee, MarqueeError};
pub use max7219::{ChainError, Max7219Chain, SpiTransport};
