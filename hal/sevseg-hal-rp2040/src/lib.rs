//! RP2040-specific backend for the sevseg HAL
//!
//! Wraps `embassy-rp` GPIO outputs so the display drivers can run on
//! RP2040-based boards.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::RpOutput;
