//! Loaders is a crate for animating several progress bars at once, each on
//! its own terminal row, updated in place and stopped cleanly by a signal.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use loaders::{Error, OrchestratorBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let orchestrator = OrchestratorBuilder::new().width(50).workers(10).build()?;
//! let report = orchestrator.run().await?;
//! println!("{} loaders completed", report.completed());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`terminal`] - Cursor primitives, their ANSI encoding, and the lock around them
//! - [`loader`] - Frames, delays, and the per-row loader task
//! - [`orchestrator`] - The `Orchestrator` and `OrchestratorBuilder` running a set of loaders
//! - [`signal`] - Interrupt and terminate listeners
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod error;
pub mod loader;
pub mod orchestrator;
pub mod signal;
pub mod terminal;

pub use error::{Error, Result};
pub use loader::{AnimationConfig, Frame, SingleLoader, Status, Summary};
pub use orchestrator::{Orchestrator, OrchestratorBuilder, Outcome, Report};
pub use terminal::{AnsiCursor, CursorSurface, TerminalArbiter};
