//! Error definitions shared by the display crates

/// Errors reported by device construction and symbol resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Construction needs exactly eight output lines (A-to-G and DP)
    WrongPinCount,
    /// The requested symbol has no rendering under the active policy
    UnsupportedSymbol,
}
