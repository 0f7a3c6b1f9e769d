//! RP2040-specific HAL for the Marquee firmware
//!
//! This crate provides RP2040 implementations of the shared `marquee-hal`
//! traits on top of embassy-rp:
//!
//! - Push-pull output pins for chip-select ([`gpio::RpOutput`])
//! - Blocking, transmit-only SPI master ([`spi::RpSpi`])

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export shared traits from marquee-hal for convenience
pub use marquee_hal::{OutputPin, SpiBus, SpiConfig};
