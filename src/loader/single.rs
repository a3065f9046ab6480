//! The sequential single-bar loader.
//!
//! With one bar there is nothing to share, so the loader owns its surface
//! directly: no arbiter, no row reservation and no cancellation. Each frame
//! overwrites the current line, and a newline follows the final frame.
//!
//! # Examples
//!
//! ```rust
//! use loaders::loader::{AnimationConfig, ScriptedDelay, SingleLoader};
//! use loaders::terminal::AnsiCursor;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), loaders::Error> {
//! let config = AnimationConfig::new(3, 1)?;
//! let mut cursor = AnsiCursor::new(Vec::new());
//!
//! SingleLoader::new(&config)
//!     .with_delays(ScriptedDelay::from_millis(&[0]))
//!     .run(&mut cursor)
//!     .await;
//!
//! assert!(cursor.into_inner().ends_with("Loader 1: [===] ✓ 0ms\n".as_bytes()));
//! # Ok(())
//! # }
//! ```

use super::config::AnimationConfig;
use super::delay::{DelaySource, RandomDelay};
use super::frame::Frame;
use super::summary::{Status, Summary};
use crate::terminal::CursorSurface;

use std::fmt;
use tracing::debug;

/// Row label used by the single-bar loader.
const LINE: usize = 1;

/// Draws one bar from 0 to `width` in place.
pub struct SingleLoader {
    width: usize,
    delays: Box<dyn DelaySource>,
}

impl fmt::Debug for SingleLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleLoader")
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

impl SingleLoader {
    /// Create a loader using the config's width and random delays below its
    /// maximum delay. The worker count is ignored.
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            width: config.width(),
            delays: Box::new(RandomDelay::new(config.max_delay())),
        }
    }

    /// Replace the delay source.
    pub fn with_delays(self, delays: impl DelaySource + 'static) -> Self {
        Self {
            delays: Box::new(delays),
            ..self
        }
    }

    /// Get the bar width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Animate the bar to completion on `surface`.
    pub async fn run<S: CursorSurface + ?Sized>(mut self, surface: &mut S) -> Summary {
        let mut summary = Summary::new(LINE, self.width);

        for progress in 0..=self.width {
            let delay = self.delays.next_delay();
            let frame = Frame::new(LINE, progress, self.width, delay.as_millis() as u64);

            surface.clear_current_line();
            surface.write_text(&frame.to_string());
            summary.record_frame(progress, delay);

            tokio::time::sleep(delay).await;
        }
        surface.write_text("\n");

        debug!(width = self.width, "Single loader completed");
        summary.with_status(Status::Completed)
    }
}
