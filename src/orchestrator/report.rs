//! Aggregate result of a run.

use crate::loader::Summary;

use std::fmt;
use std::time::Duration;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cancellation token was still active when every loader had exited.
    Completed,
    /// The cancellation token had been triggered.
    Interrupted,
}

impl Outcome {
    /// The status line printed below the loaders.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Completed => "All loaders completed!",
            Self::Interrupted => "Loaders interrupted!",
        }
    }

    /// Whether the run was interrupted.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What [`Orchestrator::run`](super::Orchestrator::run) returns.
#[derive(Debug, Clone)]
pub struct Report {
    outcome: Outcome,
    summaries: Vec<Summary>,
    elapsed: Duration,
}

impl Report {
    pub(crate) fn new(outcome: Outcome, summaries: Vec<Summary>, elapsed: Duration) -> Self {
        Self {
            outcome,
            summaries,
            elapsed,
        }
    }

    /// Get the run's outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Get one summary per loader, ordered by line.
    pub fn summaries(&self) -> &[Summary] {
        &self.summaries
    }

    /// Get the wall time from setup to drain.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Count the loaders that reached full width.
    pub fn completed(&self) -> usize {
        self.summaries.iter().filter(|s| s.is_complete()).count()
    }
}
