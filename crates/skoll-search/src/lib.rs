//! Grover Search Circuit Construction
//!
//! This crate builds the circuits for Grover's algorithm: the phase
//! oracle that marks one basis state, the diffusion operator that
//! amplifies the marked amplitude, and the composed search circuit with
//! the optimal iteration count.
//!
//! Grover's algorithm finds a marked item in an unstructured search
//! space of N = 2^n states with O(sqrt(N)) oracle queries, compared to
//! O(N) classically.
//!
//! # Example
//!
//! ```rust
//! use skoll_search::{TargetState, grover_circuit, optimal_iterations};
//!
//! let target = TargetState::parse("101").unwrap();
//! assert_eq!(optimal_iterations(target.num_qubits()), 2);
//!
//! let circuit = grover_circuit(&target).unwrap();
//! assert_eq!(circuit.num_qubits(), 3);
//! ```
//!
//! The iteration count is a fixed closed-form value, not a convergence
//! loop: the amplified amplitude oscillates with the iteration count, so
//! running extra iterations past the optimum lowers the success
//! probability again.

pub mod diffuser;
pub mod error;
pub mod grover;
pub mod oracle;
pub mod target;

pub use diffuser::diffuser;
pub use error::{SearchError, SearchResult};
pub use grover::{
    grover_circuit, grover_circuit_with_iterations, optimal_iterations, success_probability,
};
pub use oracle::oracle;
pub use target::TargetState;

/// The widest register the exact (ancilla-free) oracle construction
/// supports. The multi-controlled phase flip is decomposed as Z, CZ, or
/// H·CCX·H; wider registers would need ancilla qubits.
pub const MAX_QUBITS: usize = 3;
