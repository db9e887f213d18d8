//! Two-display seven-segment demo
//!
//! Device 1 cycles the digits and then the special characters, device 2
//! cycles the alphabet. Each time the alphabet wraps, both displays blank
//! and the decimal point toggles for the next round.

#![no_std]
#![no_main]

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Timer;
use heapless::Vec;
use {defmt_rtt as _, panic_probe as _};

use sevseg_core::glyph::SPECIAL_SYMBOLS;
use sevseg_drivers::sevseg::SevenSegment;
use sevseg_hal_rp2040::RpOutput;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("sevseg demo starting...");

    let p = embassy_rp::init(Default::default());

    // Display 1 on GPIO 0-7, display 2 on GPIO 8-15, both wired in module
    // silkscreen order (pins 1,2,4,5,6,7,9,10). Lines start high: blank.
    let mut d1 = SevenSegment::new(
        RpOutput::new(Output::new(p.PIN_0, Level::High)),
        RpOutput::new(Output::new(p.PIN_1, Level::High)),
        RpOutput::new(Output::new(p.PIN_2, Level::High)),
        RpOutput::new(Output::new(p.PIN_3, Level::High)),
        RpOutput::new(Output::new(p.PIN_4, Level::High)),
        RpOutput::new(Output::new(p.PIN_5, Level::High)),
        RpOutput::new(Output::new(p.PIN_6, Level::High)),
        RpOutput::new(Output::new(p.PIN_7, Level::High)),
    );
    d1.configure();

    let mut d2 = SevenSegment::new(
        RpOutput::new(Output::new(p.PIN_8, Level::High)),
        RpOutput::new(Output::new(p.PIN_9, Level::High)),
        RpOutput::new(Output::new(p.PIN_10, Level::High)),
        RpOutput::new(Output::new(p.PIN_11, Level::High)),
        RpOutput::new(Output::new(p.PIN_12, Level::High)),
        RpOutput::new(Output::new(p.PIN_13, Level::High)),
        RpOutput::new(Output::new(p.PIN_14, Level::High)),
        RpOutput::new(Output::new(p.PIN_15, Level::High)),
    );
    d2.configure();

    let mut chars1: Vec<u8, 15> = Vec::new();
    for digit in b'0'..=b'9' {
        unwrap!(chars1.push(digit));
    }
    for special in SPECIAL_SYMBOLS {
        unwrap!(chars1.push(special));
    }

    let mut chars2: Vec<u8, 26> = Vec::new();
    for letter in b'a'..=b'z' {
        unwrap!(chars2.push(letter));
    }

    let mut dot = false;
    let mut counter = 0;
    loop {
        if counter == chars2.len() {
            d1.clear();
            d2.clear();
            counter = 0;
            dot = !dot;
        } else {
            let c1 = chars1[counter % chars1.len()];
            let c2 = chars2[counter % chars2.len()];
            if let Err(e) = d1.display_dot(c1, dot) {
                warn!("display 1: {}", e);
            }
            if let Err(e) = d2.display_dot(c2, dot) {
                warn!("display 2: {}", e);
            }
            counter += 1;
        }
        Timer::after_secs(1).await;
    }
}
