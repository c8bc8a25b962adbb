use thiserror::Error;

/// Errors raised at the crate boundary: layout parsing, harness coordinates
/// and configuration. Board operations themselves never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("board layout must have 64 cells, got {0}")]
    LayoutLength(usize),

    #[error("invalid board layout symbol {symbol:?} at cell {index}")]
    LayoutSymbol { symbol: char, index: usize },

    #[error("first and second bitboards overlap: {0:#018x}")]
    OverlappingDiscs(u64),

    #[error("coordinate ({x}, {y}) is off the board")]
    OffBoard { x: i64, y: i64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
