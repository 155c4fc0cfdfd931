//! Error types for search circuit construction.

use thiserror::Error;

/// Errors that can occur while constructing search circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Target bit-string is empty (zero qubits).
    #[error("Target bit-string is empty; the register needs at least one qubit")]
    EmptyTarget,

    /// Target bit-string length does not match the expected register size.
    #[error("Target bit-string '{target}' has length {got}, expected {expected}")]
    TargetLength {
        /// The offending target string.
        target: String,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Target bit-string contains a character other than '0' or '1'.
    #[error("Target bit-string '{target}' has a non-binary character at position {position}")]
    NonBinaryTarget {
        /// The offending target string.
        target: String,
        /// Byte position of the first non-binary character.
        position: usize,
    },

    /// Register is wider than the exact oracle decomposition supports.
    #[error("Register of {got} qubits exceeds the supported maximum of {max}")]
    TooManyQubits {
        /// Requested register size.
        got: usize,
        /// Maximum supported size.
        max: usize,
    },

    /// Circuit construction failed.
    #[error(transparent)]
    Ir(#[from] skoll_ir::IrError),
}

/// Result type for search circuit construction.
pub type SearchResult<T> = Result<T, SearchError>;
