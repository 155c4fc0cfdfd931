//! Skoll Backend Abstraction Layer
//!
//! This crate provides a unified interface for executing circuits on
//! quantum backends. The search pipeline treats execution as a black box:
//! a backend accepts a [`Circuit`](skoll_ir::Circuit) and a shot count and
//! eventually yields an [`ExecutionResult`] holding measurement [`Counts`].
//!
//! # Overview
//!
//! - A common [`Backend`] trait for job submission and management
//! - [`Capabilities`] to describe backend limits
//! - Job lifecycle tracking via [`Job`], [`JobId`], and [`JobStatus`]
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use skoll_hal::Backend;
//! use skoll_sim::SimulatorBackend;
//! use skoll_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let circuit = Circuit::bell()?;
//!     let backend = SimulatorBackend::new();
//!
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Analyze the most frequent outcome
//!     if let Some((bitstring, count)) = result.counts.most_frequent() {
//!         println!("Most frequent: {} ({} times)", bitstring, count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::{Backend, BackendConfig, BackendFactory};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
