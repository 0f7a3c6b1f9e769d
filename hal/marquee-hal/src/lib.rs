//! Marquee Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the matrix drivers are
//! written against. Chip-specific HALs implement them, so the scroll logic
//! can be exercised on the host with mocks and run unchanged on the board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  marquee-drivers (MAX7219 chain, loop)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  marquee-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ marquee-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (chip-select line)
//! - [`spi::SpiBus`] - Write-only SPI master

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::{BitOrder, Mode, SpiBus, SpiConfig};
