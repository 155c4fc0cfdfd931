//! Backend capability introspection.

use serde::{Deserialize, Serialize};

/// Capabilities of a quantum backend.
///
/// Describes the limits a circuit must fit within before submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this backend is a simulator.
    pub is_simulator: bool,
}

impl Capabilities {
    /// Capabilities for a local simulator with the given register size.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            max_shots: 1_000_000,
            is_simulator: true,
        }
    }

    /// Check whether a circuit of the given width fits on this backend.
    pub fn supports_qubits(&self, num_qubits: usize) -> bool {
        num_qubits <= self.num_qubits as usize
    }
}
