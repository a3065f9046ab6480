//! Configuration structures and defaults for the orchestrator.
//!
//! # Examples
//!
//! ## Using Callbacks
//!
//! ```rust
//! use loaders::orchestrator::WorkerCallback;
//! use loaders::loader::{Status, Summary};
//!
//! let callback: WorkerCallback = Box::new(|summary: &Summary| {
//!     match summary.status() {
//!         Status::Completed => eprintln!("✓ Loader {}", summary.line()),
//!         Status::Cancelled => eprintln!("✗ Loader {} at {}", summary.line(), summary.progress()),
//!     }
//! });
//! ```
//!
//! ## Deterministic Delays
//!
//! ```rust
//! use loaders::orchestrator::DelayFactory;
//! use loaders::loader::{DelaySource, ScriptedDelay};
//! use std::sync::Arc;
//!
//! // Lower rows animate more slowly
//! let delays: DelayFactory = Arc::new(|line: usize| {
//!     Box::new(ScriptedDelay::from_millis(&[line as u64 * 10])) as Box<dyn DelaySource>
//! });
//! ```

use crate::loader::{AnimationConfig, DelaySource, Summary};
use crate::terminal::{AnsiCursor, TerminalArbiter};

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Callback type for loader exit events
pub type WorkerCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Builds the delay source of the loader on a given 1-based line.
pub type DelayFactory = Arc<dyn Fn(usize) -> Box<dyn DelaySource> + Send + Sync>;

/// Configuration structure for the orchestrator
#[derive(Clone)]
pub struct OrchestratorConfig {
    /// Bar width, loader count and delay bound.
    pub animation: AnimationConfig,
    /// Lock around the terminal every loader draws on.
    pub arbiter: Arc<TerminalArbiter>,
    /// Per-line delay sources. Random delays are used when unset.
    pub delays: Option<DelayFactory>,
    /// Shared cancellation signal.
    pub token: CancellationToken,
    /// Callback for when each loader exits.
    pub on_complete: Option<Arc<WorkerCallback>>,
}

impl std::fmt::Debug for OrchestratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrchestratorConfig")
            .field("animation", &self.animation)
            .field("arbiter", &self.arbiter)
            .field("delays", &self.delays.is_some())
            .field("cancelled", &self.token.is_cancelled())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            arbiter: Arc::new(TerminalArbiter::new(AnsiCursor::stdout())),
            delays: None,
            token: CancellationToken::new(),
            on_complete: None,
        }
    }
}
