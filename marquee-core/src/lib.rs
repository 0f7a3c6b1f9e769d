//! Board-agnostic core logic for the Marquee firmware
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Serial transport trait the chain driver is written against
//! - MAX7219 register map and the daisy-chain transaction builder
//! - Scroll buffer and the message-to-column stream
//! - Glyph table and validated messages
//! - Configuration types and the embedded config parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod protocol;
pub mod scroll;
pub mod text;
pub mod traits;
