//! Sevseg Hardware Abstraction Layer
//!
//! This crate defines the output-line trait the display drivers are generic
//! over, so the same driver code runs against any chip HAL (RP2040, AVR,
//! host-side mocks, ...).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (sevseg-firmware, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sevseg-drivers (SevenSegment<P, S>)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sevseg-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  sevseg-hal-  │       │ any infallible│
//! │    rp2040     │       │ embedded-hal  │
//! │               │       │ pin (adapter) │
//! └───────────────┘       └───────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{EmbeddedHalPin, OutputPin};
