//! Builder pattern implementation for creating Orchestrator instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use loaders::orchestrator::OrchestratorBuilder;
//!
//! let orchestrator = OrchestratorBuilder::new()
//!     .width(30)
//!     .workers(4)
//!     .build()?;
//! # Ok::<(), loaders::Error>(())
//! ```
//!
//! ## Callbacks and Shared Cancellation
//!
//! ```rust
//! use loaders::orchestrator::OrchestratorBuilder;
//! use tokio_util::sync::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let orchestrator = OrchestratorBuilder::hidden()
//!     .cancellation_token(token.clone())
//!     .on_complete(|summary| {
//!         eprintln!("loader {} exited at {}", summary.line(), summary.progress());
//!     })
//!     .build()?;
//!
//! // Cancelling from anywhere stops every loader
//! token.cancel();
//! # Ok::<(), loaders::Error>(())
//! ```

use super::{config::OrchestratorConfig, orchestrator::Orchestrator};
use crate::loader::{AnimationConfig, DelaySource, Summary};
use crate::terminal::{CursorSurface, TerminalArbiter};
use crate::Result;

use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// A builder used to create an [`Orchestrator`].
///
/// Width, worker count and maximum delay are validated by
/// [`build`](OrchestratorBuilder::build).
pub struct OrchestratorBuilder {
    width: usize,
    workers: usize,
    max_delay: Duration,
    config: OrchestratorConfig,
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        let animation = AnimationConfig::default();
        Self {
            width: animation.width(),
            workers: animation.workers(),
            max_delay: animation.max_delay(),
            config: OrchestratorConfig::default(),
        }
    }
}

impl OrchestratorBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        OrchestratorBuilder::default()
    }

    /// Convenience function to discard all terminal output.
    pub fn hidden() -> Self {
        let mut builder = OrchestratorBuilder::default();
        builder.config.arbiter = Arc::new(TerminalArbiter::hidden());
        builder
    }

    /// Set the number of cells in each bar.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the number of concurrent loaders.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the exclusive upper bound of random frame delays.
    pub fn max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Draw on `surface` instead of standard output.
    pub fn surface(mut self, surface: impl CursorSurface + Send + 'static) -> Self {
        self.config.arbiter = Arc::new(TerminalArbiter::new(surface));
        self
    }

    /// Share an existing arbiter, for instance with code that prints around
    /// the loaders.
    pub fn arbiter(mut self, arbiter: Arc<TerminalArbiter>) -> Self {
        self.config.arbiter = arbiter;
        self
    }

    /// Build each loader's delay source from its 1-based line.
    ///
    /// ```rust
    /// use loaders::orchestrator::OrchestratorBuilder;
    /// use loaders::loader::ScriptedDelay;
    ///
    /// let orchestrator = OrchestratorBuilder::hidden()
    ///     .delays(|_line| Box::new(ScriptedDelay::from_millis(&[1, 2, 3])))
    ///     .build()?;
    /// # Ok::<(), loaders::Error>(())
    /// ```
    pub fn delays<F>(mut self, factory: F) -> Self
    where
        F: Fn(usize) -> Box<dyn DelaySource> + Send + Sync + 'static,
    {
        self.config.delays = Some(Arc::new(factory));
        self
    }

    /// Use an externally owned cancellation token.
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.config.token = token;
        self
    }

    /// Set callback for when each loader exits.
    ///
    /// The callback runs on the loader's task as soon as it stops, whether it
    /// completed or was cancelled.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Create the [`Orchestrator`] with the specified options.
    pub fn build(mut self) -> Result<Orchestrator> {
        self.config.animation =
            AnimationConfig::new(self.width, self.workers)?.with_max_delay(self.max_delay)?;
        Ok(Orchestrator::new(self.config))
    }
}
