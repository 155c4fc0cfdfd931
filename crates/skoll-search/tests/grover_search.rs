//! End-to-end tests for Grover search on the local simulator.
//!
//! Sampling-based assertions use thresholds far below the theoretical
//! success probabilities, so they are stable across seeds.

use skoll_hal::Backend;
use skoll_ir::Circuit;
use skoll_search::{
    grover_circuit, grover_circuit_with_iterations, optimal_iterations, oracle, TargetState,
};
use skoll_sim::{SimulatorBackend, Statevector};

/// Build the target string whose marked basis-state index is `index`
/// (character i carries bit i).
fn target_string(index: usize, n: usize) -> String {
    (0..n)
        .map(|i| if (index >> i) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Run a measurement-free pass of `circuit` and return the final state.
fn final_state(circuit: &Circuit) -> Statevector {
    let mut sv = Statevector::new(circuit.num_qubits());
    for instruction in circuit.instructions() {
        sv.apply(instruction);
    }
    sv
}

#[test]
fn marked_state_amplified_above_uniform_for_all_targets() {
    for n in [2usize, 3] {
        let baseline = 1.0 / (1 << n) as f64;
        for index in 0..(1 << n) {
            let target = TargetState::parse(&target_string(index, n)).unwrap();
            assert_eq!(target.index(), index);

            let circuit = grover_circuit(&target).unwrap();
            let sv = final_state(&circuit);

            let p = sv.probability(index);
            assert!(
                p > baseline,
                "target {} (n={}) reached probability {:.4}, baseline {:.4}",
                target,
                n,
                p,
                baseline
            );
        }
    }
}

#[test]
fn oracle_applied_twice_is_identity() {
    let target = TargetState::parse("011").unwrap();
    let n = target.num_qubits();
    let fragment = oracle(&target).unwrap();

    // Uniform superposition over 3 qubits.
    let mut prep = Circuit::with_size("prep", n as u32, 0);
    for q in 0..n as u32 {
        prep.h(skoll_ir::QubitId(q)).unwrap();
    }

    let mut sv = final_state(&prep);
    let amp = 1.0 / ((1 << n) as f64).sqrt();

    // One application flips only the marked amplitude's sign.
    for instruction in fragment.instructions() {
        sv.apply(instruction);
    }
    for outcome in 0..(1 << n) {
        let expected = if outcome == target.index() { -amp } else { amp };
        assert!((sv.amplitude(outcome).re - expected).abs() < 1e-10);
        assert!(sv.amplitude(outcome).im.abs() < 1e-10);
    }

    // A second application restores the uniform state.
    for instruction in fragment.instructions() {
        sv.apply(instruction);
    }
    for outcome in 0..(1 << n) {
        assert!((sv.amplitude(outcome).re - amp).abs() < 1e-10);
        assert!(sv.amplitude(outcome).im.abs() < 1e-10);
    }
}

#[tokio::test]
async fn two_qubit_search_finds_target_with_high_frequency() {
    let target = TargetState::parse("11").unwrap();
    assert_eq!(optimal_iterations(target.num_qubits()), 1);

    let circuit = grover_circuit(&target).unwrap();
    let backend = SimulatorBackend::new();

    let job_id = backend.submit(&circuit, 1000).await.unwrap();
    let result = backend.wait(&job_id).await.unwrap();

    assert_eq!(result.counts.total_shots(), 1000);

    let (winner, count) = result.counts.most_frequent().unwrap();
    assert_eq!(winner, "11");
    assert!(
        count as f64 / 1000.0 > 0.9,
        "observed frequency {} too low",
        count
    );
}

#[tokio::test]
async fn three_qubit_search_finds_target_well_above_baseline() {
    let target = TargetState::parse("101").unwrap();
    assert_eq!(optimal_iterations(target.num_qubits()), 2);

    let circuit = grover_circuit(&target).unwrap();
    let backend = SimulatorBackend::new();

    let job_id = backend.submit(&circuit, 2000).await.unwrap();
    let result = backend.wait(&job_id).await.unwrap();

    assert_eq!(result.counts.total_shots(), 2000);

    // Theoretical success probability is ~0.945; the uniform baseline is
    // 1/8.
    let (winner, count) = result.counts.most_frequent().unwrap();
    assert_eq!(winner, "101");
    assert!(
        count as f64 / 2000.0 > 0.5,
        "observed frequency {} too low",
        count
    );
}

#[tokio::test]
async fn extra_iterations_degrade_two_qubit_search() {
    let target = TargetState::parse("11").unwrap();

    // Two iterations on n=2 rotate past the marked state
    // (success probability ~0.25 instead of 1.0).
    let circuit = grover_circuit_with_iterations(&target, 2).unwrap();
    let sv = final_state(&circuit);

    assert!(sv.probability(target.index()) < 0.5);
}
