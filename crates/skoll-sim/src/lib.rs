//! Skoll Local Statevector Simulator
//!
//! This crate provides a local quantum simulator for testing and small
//! experiments. It uses statevector simulation, which gives exact
//! amplitudes but is limited by memory to roughly 20-25 qubits.
//!
//! # Features
//!
//! - **Exact simulation**: full statevector representation
//! - **All Skoll gates**: supports every gate in `skoll-ir`
//! - **Measurement sampling**: probabilistic sampling with configurable shots
//!
//! # Example
//!
//! ```ignore
//! use skoll_sim::SimulatorBackend;
//! use skoll_hal::Backend;
//! use skoll_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!
//!     let circuit = Circuit::bell()?;
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Expect ~50% |00⟩ and ~50% |11⟩
//!     println!("Results: {:?}", result.counts);
//!
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
