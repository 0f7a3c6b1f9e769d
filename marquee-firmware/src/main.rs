//! Marquee - Scrolling Text Firmware
//!
//! Drives a daisy chain of MAX7219 8x8 matrices from an RP2040 and scrolls a
//! fixed message across them, right to left, forever.
//!
//! Wiring (SPI0, mode 0, MSB first):
//!
//! ```text
//!   RP2040            MAX7219 #0 ──DOUT──► DIN #1 ──► ... ──► #N-1
//!   GPIO18 SCK  ────► CLK (all devices)
//!   GPIO19 MOSI ────► DIN (#0)
//!   GPIO17 CS   ────► LOAD/CS (all devices, active low)
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use marquee_core::config::{MarqueeConfig, DEFAULT_MESSAGE};
use marquee_core::text::Message;
use marquee_drivers::{Marquee, Max7219Chain, SpiTransport};
use marquee_hal_rp2040::gpio::RpOutput;
use marquee_hal_rp2040::spi::RpSpi;
use marquee_hal_rp2040::SpiConfig;

mod config;

// The message borrows from the configuration for the life of the program
static CONFIG: StaticCell<MarqueeConfig> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Marquee firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config: &'static MarqueeConfig = CONFIG.init(config::load());
    let display = &config.display;
    info!(
        "Display config: {} devices, intensity={}, scan_limit={}, {}us/column",
        display.chain_length.get(),
        display.settings.intensity,
        display.settings.scan_limit,
        display.scroll_delay_us
    );

    // SPI0 TX-only, CS idles high
    let spi_config = SpiConfig::with_frequency(config.bus.frequency_hz);
    let spi = unwrap!(RpSpi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, &spi_config));
    let cs = RpOutput::new(Output::new(p.PIN_17, Level::High));
    let transport = SpiTransport::new(spi, cs);
    info!("SPI0 ready at {} Hz", spi_config.frequency);

    let message = match Message::ascii(config.message.as_str()) {
        Ok(message) => message,
        Err(e) => {
            warn!("Message rejected: {}, using default", e);
            unwrap!(Message::ascii(DEFAULT_MESSAGE))
        }
    };
    info!("Scrolling {} characters", message.len());

    let chain = Max7219Chain::new(transport, display.chain_length);
    let mut marquee = Marquee::new(
        chain,
        display.settings,
        message,
        Delay,
        display.scroll_delay_us,
    );

    match marquee.run() {
        Ok(never) => match never {},
        Err(e) => defmt::panic!("Display chain failed: {}", e),
    }
}
