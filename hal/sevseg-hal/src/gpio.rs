//! GPIO pin abstractions
//!
//! Provides the digital output-line trait the display drivers drive, plus an
//! adapter for infallible `embedded-hal` pins.

use core::convert::Infallible;

use embedded_hal::digital::ErrorType;

/// Digital output line
///
/// Implementations handle the actual hardware register manipulation for the
/// specific chip. A constructed implementation is already in output-drive
/// mode; line writes cannot fail.
pub trait OutputPin {
    /// Set the line high (logic 1)
    fn set_high(&mut self);

    /// Set the line low (logic 0)
    fn set_low(&mut self);

    /// Set the line to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the line is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the line is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Adapter exposing any infallible `embedded-hal` output pin as [`OutputPin`]
///
/// `embedded-hal`'s stateful read takes `&mut self`, so the adapter shadows
/// the last driven level instead; construction drives the pin once to make
/// the shadow truthful.
pub struct EmbeddedHalPin<T> {
    pin: T,
    high: bool,
}

impl<T> EmbeddedHalPin<T>
where
    T: embedded_hal::digital::OutputPin + ErrorType<Error = Infallible>,
{
    /// Wrap an `embedded-hal` pin, driving it to the given initial level.
    pub fn new(mut pin: T, high: bool) -> Self {
        match if high { pin.set_high() } else { pin.set_low() } {
            Ok(()) => Self { pin, high },
            Err(e) => match e {},
        }
    }

    /// Unwrap the inner pin.
    pub fn into_inner(self) -> T {
        self.pin
    }
}

impl<T> OutputPin for EmbeddedHalPin<T>
where
    T: embedded_hal::digital::OutputPin + ErrorType<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(e) => match e {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(e) => match e {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal embedded-hal pin for testing the adapter
    struct EhPin {
        high: bool,
    }

    impl ErrorType for EhPin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::OutputPin for EhPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_adapter_tracks_driven_level() {
        let mut pin = EmbeddedHalPin::new(EhPin { high: false }, true);
        assert!(pin.is_set_high());

        pin.set_low();
        assert!(pin.is_set_low());
        assert!(!pin.into_inner().high);
    }

    #[test]
    fn test_adapter_initial_level_reaches_hardware() {
        let pin = EmbeddedHalPin::new(EhPin { high: true }, false);
        assert!(pin.is_set_low());
        assert!(!pin.into_inner().high);
    }

    #[test]
    fn test_set_state_default() {
        let mut pin = EmbeddedHalPin::new(EhPin { high: false }, false);
        pin.set_state(true);
        assert!(pin.is_set_high());
        pin.set_state(false);
        assert!(pin.is_set_low());
    }
}
