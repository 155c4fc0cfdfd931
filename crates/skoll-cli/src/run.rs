//! The end-to-end search demonstration.

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use skoll_hal::Backend;
use skoll_search::{
    TargetState, grover_circuit_with_iterations, optimal_iterations, success_probability,
};
use skoll_sim::SimulatorBackend;

use crate::output::{
    print_counts, print_header, print_result, print_section, print_success, print_warning,
};
use crate::report;

/// Execute one search run: build, simulate, interpret, report.
pub async fn execute(
    target: &str,
    qubits: Option<usize>,
    shots: u32,
    iterations: usize,
    out_dir: &str,
) -> Result<()> {
    let target = match qubits {
        Some(n) => TargetState::parse_sized(target, n)?,
        None => TargetState::parse(target)?,
    };
    let n = target.num_qubits();

    let optimal = optimal_iterations(n);
    let iterations = if iterations == 0 { optimal } else { iterations };

    print_header("Grover's Search");

    print_section("Problem Setup");
    print_result("Target state", &target);
    print_result("Qubits", n);
    print_result("Search space size", 1usize << n);
    print_result(
        "Grover iterations",
        if iterations == optimal {
            format!("{iterations} (optimal)")
        } else {
            format!("{iterations} (optimal is {optimal})")
        },
    );
    print_result(
        "Success probability",
        format!("{:.1}%", success_probability(n, iterations) * 100.0),
    );

    print_section("Circuit Generation");
    let circuit = grover_circuit_with_iterations(&target, iterations)?;
    print_result("Circuit depth", circuit.depth());
    print_result("Gate count", circuit.num_gates());

    print_section("Simulation");
    let backend = SimulatorBackend::new();
    print_result("Backend", backend.name());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Running {shots} shots..."));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let job_id = backend.submit(&circuit, shots).await?;
    let result = backend.wait(&job_id).await?;
    spinner.finish_and_clear();

    print_counts(&result);

    print_section("Interpretation");
    let (winner, count) = result
        .counts
        .most_frequent()
        .context("simulation produced no counts")?;
    let frequency = count as f64 / f64::from(shots);

    print_result("Most frequent outcome", format!("|{winner}⟩"));
    print_result(
        "Observed frequency",
        format!("{frequency:.3} ({count}/{shots})"),
    );

    if winner == target.as_str() {
        print_success("Search found the marked state");
    } else {
        print_warning("Most frequent outcome differs from the target");
    }

    let path = report::write_report(Path::new(out_dir), &target, iterations, &result)?;
    print_result("Results file", path.display());

    tracing::info!(
        bits = target.as_str(),
        winner,
        frequency,
        "search run complete"
    );

    Ok(())
}
