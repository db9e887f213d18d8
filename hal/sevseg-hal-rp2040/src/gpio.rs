//! GPIO output lines over embassy-rp

use embassy_rp::gpio::Output;
use sevseg_hal::OutputPin;

/// Output line backed by an RP2040 GPIO
///
/// The wrapped [`Output`] is already in output-drive mode and its writes
/// cannot fail, matching the [`OutputPin`] contract.
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    /// Wrap a configured embassy-rp output.
    pub fn new(output: Output<'d>) -> Self {
        Self(output)
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
