//! Loader summary functionality.
//!
//! This module contains the [`Summary`] struct and [`Status`] enum describing
//! how far a loader got before it exited.
//!
//! # Examples
//!
//! ```rust
//! use loaders::loader::{Status, Summary};
//! use std::time::Duration;
//!
//! let mut summary = Summary::new(3, 10);
//! assert_eq!(summary.status(), Status::Cancelled);
//!
//! summary.record_frame(0, Duration::from_millis(12));
//!
//! assert_eq!(summary.frames(), 1);
//! assert!(!summary.is_complete());
//! ```

use std::time::Duration;

/// Loader status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Loader drew its final frame
    Completed,
    /// Loader observed cancellation and stopped early
    Cancelled,
}

/// What a loader reports when it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// 1-based row.
    line: usize,
    /// Bar width.
    width: usize,
    /// Progress of the last drawn frame.
    progress: usize,
    /// Number of frames drawn.
    frames: usize,
    /// Last drawn delay.
    last_delay: Duration,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`] for the loader on `line`.
    ///
    /// A loader counts as cancelled until it draws its final frame.
    pub fn new(line: usize, width: usize) -> Self {
        Self {
            line,
            width,
            progress: 0,
            frames: 0,
            last_delay: Duration::ZERO,
            status: Status::Cancelled,
        }
    }

    /// Attach a status to a [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Note that a frame at `progress` was drawn.
    pub fn record_frame(&mut self, progress: usize, delay: Duration) {
        debug_assert!(self.frames == 0 || progress >= self.progress);
        self.progress = progress;
        self.last_delay = delay;
        self.frames += 1;
    }

    /// Get the loader's row.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the loader's bar width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the progress of the last drawn frame.
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Get the number of drawn frames.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Get the delay drawn for the last frame.
    pub fn last_delay(&self) -> Duration {
        self.last_delay
    }

    /// Get the summary's status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the loader reached its full width.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Completed && self.progress == self.width
    }
}
