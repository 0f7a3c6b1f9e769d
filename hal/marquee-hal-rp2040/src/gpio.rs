//! GPIO output wrapper for RP2040
//!
//! Adapts an embassy-rp [`Output`] to the `marquee-hal` [`OutputPin`] trait.

use embassy_rp::gpio::Output;
use marquee_hal::OutputPin;

/// Push-pull output pin
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Wrap an already configured embassy output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }

    /// Return the underlying embassy output
    pub fn release(self) -> Output<'d> {
        self.pin
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
