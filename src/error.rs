//! Error types for prefix-free label generation.

use thiserror::Error;

/// Error variants for labeling operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The alphabet has fewer than two symbols.
    #[error("alphabet must have at least two symbols, got {0}")]
    InvalidBase(usize),

    /// A symbol appears more than once in an alphabet.
    #[error("duplicate alphabet symbol: {0:?}")]
    DuplicateSymbol(char),

    /// A label refers to a symbol outside the alphabet.
    #[error("symbol index {index} out of range for alphabet of size {size}")]
    SymbolOutOfRange {
        /// The offending symbol index.
        index: usize,
        /// Number of symbols in the alphabet.
        size: usize,
    },
}

/// A specialized Result type for labeling operations.
pub type Result<T> = std::result::Result<T, Error>;
