//! Core orchestrator implementation.
//!
//! A run goes through four phases:
//!
//! 1. Setup: reserve one terminal row per loader and return to the top of the
//!    block.
//! 2. Running: spawn the loaders and a listener that cancels the shared token
//!    when the shutdown future resolves.
//! 3. Draining: wait for every loader to exit.
//! 4. Report: move below the block and print the outcome.
//!
//! # Examples
//!
//! ## Stopping After a Timeout
//!
//! ```rust,no_run
//! use loaders::orchestrator::OrchestratorBuilder;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), loaders::Error> {
//! let orchestrator = OrchestratorBuilder::new().build()?;
//! let report = orchestrator
//!     .run_until(tokio::time::sleep(Duration::from_secs(2)))
//!     .await?;
//! println!("{} of 10 loaders finished", report.completed());
//! # Ok(())
//! # }
//! ```

use super::config::OrchestratorConfig;
use super::report::{Outcome, Report};
use crate::loader::{DelaySource, ProgressWorker, RandomDelay};
use crate::signal::Shutdown;
use crate::{Error, Result};

use futures::future::join_all;
use indicatif::HumanDuration;
use std::fmt;
use std::fmt::Debug;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Runs a set of loaders on reserved terminal rows.
///
/// An orchestrator can be created via its builder:
///
/// ```rust
/// # fn main() -> Result<(), loaders::Error> {
/// use loaders::orchestrator::OrchestratorBuilder;
///
/// let o = OrchestratorBuilder::new().build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Orchestrator {
    config: OrchestratorConfig,
}

impl Debug for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("config", &self.config)
            .finish()
    }
}

impl Orchestrator {
    /// Creates a new Orchestrator with the given configuration.
    pub(crate) fn new(config: OrchestratorConfig) -> Self {
        Self { config }
    }

    /// Gets the number of cells in each bar.
    pub fn width(&self) -> usize {
        self.config.animation.width()
    }

    /// Gets the number of loaders.
    pub fn workers(&self) -> usize {
        self.config.animation.workers()
    }

    /// Gets the exclusive upper bound of random frame delays.
    pub fn max_delay(&self) -> Duration {
        self.config.animation.max_delay()
    }

    /// Gets a handle on the shared cancellation token.
    ///
    /// Cancelling it has the same effect as an interrupt signal.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.config.token.clone()
    }

    /// Runs the loaders, stopping them on an interrupt or terminate request.
    pub async fn run(&self) -> Result<Report> {
        let shutdown = Shutdown::install()?;
        self.run_until(shutdown.recv()).await
    }

    /// Runs the loaders, stopping them once `shutdown` resolves.
    ///
    /// The token stays cancelled afterwards, so a second run on the same
    /// orchestrator reports [`Outcome::Interrupted`] without drawing.
    pub async fn run_until<F>(&self, shutdown: F) -> Result<Report>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let started = Instant::now();
        let token = self.config.token.clone();
        info!(
            workers = self.workers(),
            width = self.width(),
            "Starting loaders"
        );

        self.reserve_region();

        let handles: Vec<_> = (1..=self.workers())
            .map(|line| {
                let worker = ProgressWorker::new(
                    line,
                    self.width(),
                    token.clone(),
                    self.config.arbiter.clone(),
                    self.delay_source(line),
                );
                let on_complete = self.config.on_complete.clone();

                tokio::spawn(async move {
                    let summary = worker.run().await;
                    // Call the callback for every exited loader
                    if let Some(ref callback) = on_complete {
                        callback(&summary);
                    }
                    summary
                })
            })
            .collect();

        let listener = {
            let token = token.clone();
            tokio::spawn(async move {
                shutdown.await;
                token.cancel();
            })
        };

        let results = join_all(handles).await;
        listener.abort();

        let summaries = match results.into_iter().collect::<std::result::Result<Vec<_>, _>>() {
            Ok(summaries) => summaries,
            Err(e) => {
                // Still leave the cursor below the block
                self.release_region(None);
                return Err(Error::from(e));
            }
        };

        let outcome = if token.is_cancelled() {
            Outcome::Interrupted
        } else {
            Outcome::Completed
        };
        self.release_region(Some(outcome));

        let elapsed = started.elapsed();
        info!(?outcome, "Loaders drained in {}", HumanDuration(elapsed));

        Ok(Report::new(outcome, summaries, elapsed))
    }

    /// Gets the delay source for the loader on `line`.
    fn delay_source(&self, line: usize) -> Box<dyn DelaySource> {
        match self.config.delays {
            Some(ref factory) => factory(line),
            None => Box::new(RandomDelay::new(self.max_delay())),
        }
    }

    /// Prints one blank line per loader, then returns to the first of them.
    fn reserve_region(&self) {
        let rows = self.workers();
        debug!(rows, "Reserving terminal region");
        self.config.arbiter.with_exclusive_access(|surface| {
            surface.write_text(&"\n".repeat(rows));
            surface.move_cursor_relative(-(rows as isize));
        });
    }

    /// Moves below the reserved rows and prints the outcome, if any.
    fn release_region(&self, outcome: Option<Outcome>) {
        let rows = self.workers();
        self.config.arbiter.with_exclusive_access(|surface| {
            surface.move_cursor_relative(rows as isize);
            if let Some(outcome) = outcome {
                surface.write_text(&format!("{}\n", outcome));
            }
        });
    }
}

