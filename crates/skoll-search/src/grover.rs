//! Full Grover search circuit assembly.

use std::f64::consts::PI;

use tracing::debug;

use skoll_ir::{Circuit, QubitId};

use crate::diffuser::diffuser;
use crate::error::SearchResult;
use crate::oracle::oracle;
use crate::target::TargetState;

/// The optimal number of Grover iterations for an `n`-qubit register.
///
/// For a single marked item in a space of N = 2^n states the optimum is
/// floor(π/4 · sqrt(N)), with a minimum of one iteration. The success
/// amplitude oscillates in the iteration count, so exceeding the optimum
/// lowers the measured success probability again.
pub fn optimal_iterations(n: usize) -> usize {
    let big_n = 1usize << n;
    let optimal = (PI / 4.0 * (big_n as f64).sqrt()).floor() as usize;
    optimal.max(1)
}

/// Closed-form success probability of measuring the marked state after
/// `iterations` Grover iterations on an `n`-qubit register.
///
/// sin²((2R+1)·θ) with θ = asin(1/sqrt(2^n)).
pub fn success_probability(n: usize, iterations: usize) -> f64 {
    let big_n = (1usize << n) as f64;
    let theta = (1.0 / big_n.sqrt()).asin();
    (((2 * iterations + 1) as f64) * theta).sin().powi(2)
}

/// Build the full search circuit for a target with an explicit iteration
/// count.
///
/// Layout: uniform superposition preparation (H on all qubits), then
/// `iterations` repetitions of [oracle, diffuser], then measurement of
/// all qubits.
pub fn grover_circuit_with_iterations(
    target: &TargetState,
    iterations: usize,
) -> SearchResult<Circuit> {
    let n = target.num_qubits();
    debug!(bits = target.as_str(), n, iterations, "building search circuit");

    let oracle = oracle(target)?;
    let diffuser = diffuser(n)?;

    let mut circuit = Circuit::with_size("grover", n as u32, n as u32);

    for i in 0..n {
        circuit.h(QubitId(i as u32))?;
    }

    for _ in 0..iterations {
        circuit.append(&oracle)?;
        circuit.append(&diffuser)?;
    }

    circuit.measure_all()?;

    Ok(circuit)
}

/// Build the full search circuit with the optimal iteration count.
pub fn grover_circuit(target: &TargetState) -> SearchResult<Circuit> {
    grover_circuit_with_iterations(target, optimal_iterations(target.num_qubits()))
}
