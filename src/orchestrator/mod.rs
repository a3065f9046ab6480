//! Orchestrator module containing the run loop, its builder, and configuration.
//!
//! This module provides the main [`Orchestrator`] struct and its associated
//! builder for configuring and running concurrent loaders. It reserves the
//! terminal rows, spawns one task per loader, wires up cancellation and prints
//! the final status line.
//!
//! # Overview
//!
//! - `orchestrator` - Core Orchestrator struct with the run phases
//! - `builder` - OrchestratorBuilder for flexible configuration using the builder pattern
//! - `config` - Configuration structures and callback types
//! - `report` - The aggregate outcome of a run
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use loaders::orchestrator::{OrchestratorBuilder, Outcome};
//!
//! # async fn example() -> Result<(), loaders::Error> {
//! // Ten loaders, fifty cells wide, stopped by Ctrl-C or SIGTERM
//! let orchestrator = OrchestratorBuilder::new().build()?;
//! let report = orchestrator.run().await?;
//!
//! if report.outcome() == Outcome::Interrupted {
//!     eprintln!("{} loaders finished before the interrupt", report.completed());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Hidden Output
//!
//! ```rust
//! use loaders::orchestrator::OrchestratorBuilder;
//! use loaders::loader::ScriptedDelay;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), loaders::Error> {
//! let orchestrator = OrchestratorBuilder::hidden()
//!     .width(3)
//!     .workers(2)
//!     .delays(|_| Box::new(ScriptedDelay::from_millis(&[1])))
//!     .build()?;
//!
//! let report = orchestrator.run_until(std::future::pending()).await?;
//! assert_eq!(report.completed(), 2);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod orchestrator;
pub mod report;

pub use builder::OrchestratorBuilder;
pub use config::{DelayFactory, OrchestratorConfig, WorkerCallback};
pub use orchestrator::Orchestrator;
pub use report::{Outcome, Report};
