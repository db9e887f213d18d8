//! Seven-segment display device
//!
//! Owns the eight output lines of one display module, remapped from the
//! vendor's silkscreen pin order into logical segment order at construction.
//! All rendering follows the common-anode convention: a line is pulled LOW
//! to light its segment.

use heapless::Vec;

use sevseg_core::error::Error;
use sevseg_core::glyph::Glyph;
use sevseg_core::policy::{RangePolicy, SymbolPolicy};
use sevseg_core::segment::{Segment, SegmentPattern, SEGMENT_COUNT};
use sevseg_hal::OutputPin;

/// Package role carried by each silkscreen-ordered pin
/// (module pins 1, 2, 4, 5, 6, 7, 9, 10).
pub const SILKSCREEN_ORDER: [Segment; SEGMENT_COUNT] = [
    Segment::E,
    Segment::D,
    Segment::C,
    Segment::Dp,
    Segment::B,
    Segment::A,
    Segment::F,
    Segment::G,
];

/// Single-digit seven-segment module driven over eight output lines.
pub struct SevenSegment<P, S = RangePolicy> {
    /// Output lines in logical order (A through G, then DP)
    pins: [P; SEGMENT_COUNT],
    policy: S,
}

impl<P: OutputPin> SevenSegment<P> {
    /// Create a device from its silkscreen-named pins, resolving symbols
    /// with [`RangePolicy`].
    ///
    /// Pins & display:
    ///
    /// ```text
    ///  10   9   CA   7   6
    ///  +-----------------+
    ///  |      -A(7)-     |
    ///  ||F(9)       B(6)||
    ///  |     -G(10)-     |
    ///  ||E(1)       C(4)||
    ///  |      -D(2)-     |
    ///  |           DP(5).|
    ///  +-----------------+
    ///   1   2   CA   4   5
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(p1: P, p2: P, p4: P, p5: P, p6: P, p7: P, p9: P, p10: P) -> Self {
        Self::with_policy([p1, p2, p4, p5, p6, p7, p9, p10], RangePolicy)
    }
}

impl<P: OutputPin, S: SymbolPolicy> SevenSegment<P, S> {
    /// Create a device from silkscreen-ordered pins and a resolution policy.
    ///
    /// The permutation to logical order happens here, once; everything after
    /// construction operates purely in logical space (see
    /// [`SILKSCREEN_ORDER`]).
    pub fn with_policy(silkscreen: [P; SEGMENT_COUNT], policy: S) -> Self {
        let [p1, p2, p4, p5, p6, p7, p9, p10] = silkscreen;
        Self {
            pins: [p7, p6, p4, p2, p1, p9, p10, p5],
            policy,
        }
    }

    /// Create a device from a dynamic collection of silkscreen-ordered pins.
    ///
    /// Fails with [`Error::WrongPinCount`] before any hardware write unless
    /// the collection holds exactly eight pins.
    pub fn from_pins<I>(pins: I, policy: S) -> Result<Self, Error>
    where
        I: IntoIterator<Item = P>,
    {
        let mut collected: Vec<P, SEGMENT_COUNT> = Vec::new();
        for pin in pins {
            collected.push(pin).map_err(|_| Error::WrongPinCount)?;
        }
        let silkscreen = collected.into_array().map_err(|_| Error::WrongPinCount)?;
        Ok(Self::with_policy(silkscreen, policy))
    }

    /// Bring the device to its initial blank state.
    ///
    /// Output-drive mode is a property of the [`OutputPin`] contract, so
    /// configuration reduces to asserting the inactive level on every line.
    /// Safe to call repeatedly.
    pub fn configure(&mut self) {
        self.clear();
    }

    /// Blank the display.
    pub fn clear(&mut self) {
        for pin in &mut self.pins {
            pin.set_high();
        }
    }

    /// Drive one segment pattern onto the hardware.
    ///
    /// Common anode: a line is driven LOW when its segment is lit, HIGH when
    /// it is dark. All eight lines are written on every call.
    pub fn render(&mut self, pattern: SegmentPattern) {
        for (segment, pin) in Segment::ALL.iter().zip(self.pins.iter_mut()) {
            pin.set_state(!pattern.contains(*segment));
        }
    }

    /// Display a symbol from the policy's supported set.
    pub fn display(&mut self, symbol: u8) -> Result<(), Error> {
        self.display_dot(symbol, false)
    }

    /// Display a symbol with the decimal point lit.
    pub fn display_with_dot(&mut self, symbol: u8) -> Result<(), Error> {
        self.display_dot(symbol, true)
    }

    /// Display a symbol with or without the decimal point.
    ///
    /// On resolution failure no line is touched and the prior display state
    /// stays intact.
    pub fn display_dot(&mut self, symbol: u8, dot: bool) -> Result<(), Error> {
        let glyph = self.policy.resolve(symbol)?;
        self.render(glyph.pattern().with_dot(dot));
        Ok(())
    }

    /// Display a number up to 15 (10-15 render as A-F).
    pub fn display_hex(&mut self, value: u8) -> Result<(), Error> {
        self.display_hex_dot(value, false)
    }

    /// Display a number up to 15 with the decimal point lit.
    pub fn display_hex_with_dot(&mut self, value: u8) -> Result<(), Error> {
        self.display_hex_dot(value, true)
    }

    /// Display a number up to 15 with or without the decimal point.
    pub fn display_hex_dot(&mut self, value: u8, dot: bool) -> Result<(), Error> {
        let glyph = Glyph::hex(value).ok_or(Error::UnsupportedSymbol)?;
        self.render(glyph.pattern().with_dot(dot));
        Ok(())
    }

    /// Light the decimal point alone.
    pub fn display_just_dot(&mut self) {
        self.render(Glyph::DOT.pattern());
    }

    /// Logical state of one segment, derived from the driven line level.
    pub fn is_lit(&self, segment: Segment) -> bool {
        self.pins[segment.index()].is_set_low()
    }
}
