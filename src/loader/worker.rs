//! A single loader task bound to one terminal row.
//!
//! # Examples
//!
//! ```rust
//! use loaders::loader::{ProgressWorker, ScriptedDelay, Status};
//! use loaders::terminal::TerminalArbiter;
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let arbiter = Arc::new(TerminalArbiter::hidden());
//! let worker = ProgressWorker::new(
//!     1,
//!     5,
//!     CancellationToken::new(),
//!     arbiter,
//!     Box::new(ScriptedDelay::from_millis(&[1])),
//! );
//!
//! let summary = worker.run().await;
//! assert_eq!(summary.status(), Status::Completed);
//! # }
//! ```

use super::delay::DelaySource;
use super::frame::Frame;
use super::summary::{Status, Summary};
use crate::terminal::TerminalArbiter;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Mutable state owned by one loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerState {
    line: usize,
    progress: usize,
    last_delay: Duration,
}

impl WorkerState {
    fn new(line: usize) -> Self {
        Self {
            line,
            progress: 0,
            last_delay: Duration::ZERO,
        }
    }

    /// Get the 1-based row.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the current progress.
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Get the delay drawn for the latest frame.
    pub fn last_delay(&self) -> Duration {
        self.last_delay
    }

    fn advance(&mut self, progress: usize, delay: Duration) {
        debug_assert!(progress >= self.progress, "progress must not go backwards");
        self.progress = progress;
        self.last_delay = delay;
    }
}

/// Animates one bar from 0 to `width`, one frame per loop iteration.
pub struct ProgressWorker {
    state: WorkerState,
    width: usize,
    token: CancellationToken,
    arbiter: Arc<TerminalArbiter>,
    delays: Box<dyn DelaySource>,
}

impl fmt::Debug for ProgressWorker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressWorker")
            .field("state", &self.state)
            .field("width", &self.width)
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}

impl ProgressWorker {
    /// Create a worker drawing on the 1-based row `line`.
    pub fn new(
        line: usize,
        width: usize,
        token: CancellationToken,
        arbiter: Arc<TerminalArbiter>,
        delays: Box<dyn DelaySource>,
    ) -> Self {
        Self {
            state: WorkerState::new(line),
            width,
            token,
            arbiter,
            delays,
        }
    }

    /// Get the worker's state.
    pub fn state(&self) -> &WorkerState {
        &self.state
    }

    /// Run the loader until it completes or sees cancellation.
    ///
    /// Cancellation is checked once per iteration, before drawing. A worker
    /// asleep when the token flips finishes that sleep first.
    pub async fn run(mut self) -> Summary {
        let mut summary = Summary::new(self.state.line, self.width);

        for progress in 0..=self.width {
            if self.token.is_cancelled() {
                debug!(
                    line = self.state.line,
                    progress = self.state.progress,
                    "Loader cancelled"
                );
                return summary.with_status(Status::Cancelled);
            }

            let delay = self.delays.next_delay();
            self.state.advance(progress, delay);
            self.render();
            summary.record_frame(progress, delay);

            tokio::time::sleep(delay).await;
        }

        debug!(line = self.state.line, "Loader completed");
        summary.with_status(Status::Completed)
    }

    /// Draw the current frame on the worker's row.
    fn render(&self) {
        let frame = Frame::new(
            self.state.line,
            self.state.progress,
            self.width,
            self.state.last_delay.as_millis() as u64,
        );
        let text = frame.to_string();
        let rows = self.state.line as isize - 1;

        self.arbiter.with_exclusive_access(|surface| {
            surface.save_cursor();
            surface.move_cursor_relative(rows);
            surface.clear_current_line();
            surface.write_text(&text);
            surface.restore_cursor();
        });
        trace!(line = self.state.line, progress = self.state.progress, "Frame drawn");
    }
}
