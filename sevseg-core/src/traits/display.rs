//! Character display collaborator trait
//!
//! Demo callers interleave writes to a character-grid LCD and to the
//! seven-segment devices. The LCD itself is third-party hardware behind a
//! parallel or I2C transport; this trait is the only surface the rest of
//! the workspace may rely on.

/// A character-grid display (e.g. an HD44780-class 16x2 module)
pub trait CharDisplay {
    /// Transport or controller error
    type Error;

    /// Initialize the display for the given grid size.
    fn configure(&mut self, width: u8, height: u8) -> Result<(), Self::Error>;

    /// Move the write cursor to a column and row.
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;

    /// Write raw character bytes at the cursor.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}
