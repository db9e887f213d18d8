//! Hardware driver implementations
//!
//! This crate provides the device drivers built on the traits defined in
//! `sevseg-hal` and the encoding logic in `sevseg-core`:
//!
//! - Single-digit seven-segment module, one output line per segment

#![no_std]
#![deny(unsafe_code)]

pub mod sevseg;
