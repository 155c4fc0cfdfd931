//! Target bit-string parsing and validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SearchError, SearchResult};
use crate::MAX_QUBITS;

/// The marked basis state a search circuit looks for.
///
/// A target is a validated binary string. Character `i` (leftmost first)
/// gives the required value of qubit `i`; the same convention is used by
/// the simulator when formatting measurement outcomes, so the reported
/// argmax bit-string can be compared to the target directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetState {
    bits: String,
}

impl TargetState {
    /// Parse a target bit-string, deriving the register size from its
    /// length.
    ///
    /// Fails with [`SearchError::EmptyTarget`] for an empty string,
    /// [`SearchError::NonBinaryTarget`] for any character other than
    /// '0'/'1', and [`SearchError::TooManyQubits`] when the string is
    /// longer than the exact oracle construction supports.
    pub fn parse(bits: &str) -> SearchResult<Self> {
        if bits.is_empty() {
            return Err(SearchError::EmptyTarget);
        }
        if bits.len() > MAX_QUBITS {
            return Err(SearchError::TooManyQubits {
                got: bits.len(),
                max: MAX_QUBITS,
            });
        }
        if let Some(position) = bits.bytes().position(|b| b != b'0' && b != b'1') {
            return Err(SearchError::NonBinaryTarget {
                target: bits.to_string(),
                position,
            });
        }
        Ok(Self {
            bits: bits.to_string(),
        })
    }

    /// Parse a target bit-string that must describe exactly `num_qubits`
    /// qubits.
    pub fn parse_sized(bits: &str, num_qubits: usize) -> SearchResult<Self> {
        if bits.len() != num_qubits {
            return Err(SearchError::TargetLength {
                target: bits.to_string(),
                expected: num_qubits,
                got: bits.len(),
            });
        }
        Self::parse(bits)
    }

    /// Number of qubits in the register this target addresses.
    pub fn num_qubits(&self) -> usize {
        self.bits.len()
    }

    /// Whether qubit `i` must be |1⟩ in the marked state.
    pub fn bit(&self, i: usize) -> bool {
        self.bits.as_bytes()[i] == b'1'
    }

    /// The basis-state index of the marked state (qubit `i` contributes
    /// `bit_i << i`).
    pub fn index(&self) -> usize {
        self.bits
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'1')
            .map(|(i, _)| 1 << i)
            .sum()
    }

    /// The target as a string slice.
    pub fn as_str(&self) -> &str {
        &self.bits
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}⟩", self.bits)
    }
}
