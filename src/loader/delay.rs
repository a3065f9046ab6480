//! Sources of per-frame delays.
//!
//! A loader sleeps for a freshly drawn delay after each frame and prints the
//! same value as its `{d}ms` annotation. [`RandomDelay`] is what the binary
//! uses; [`ScriptedDelay`] replays a fixed list so frame sequences can be
//! asserted exactly.
//!
//! # Examples
//!
//! ```rust
//! use loaders::loader::{DelaySource, ScriptedDelay};
//! use std::time::Duration;
//!
//! let mut delays = ScriptedDelay::from_millis(&[5, 10]);
//! assert_eq!(delays.next_delay(), Duration::from_millis(5));
//! assert_eq!(delays.next_delay(), Duration::from_millis(10));
//! assert_eq!(delays.next_delay(), Duration::from_millis(5));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Upper bound (exclusive) of a random frame delay.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(200);

/// Produces the delay before a loader's next frame.
pub trait DelaySource: Send {
    /// Draw the next delay.
    fn next_delay(&mut self) -> Duration;
}

/// Uniformly random whole-millisecond delays in `[0, max)`.
#[derive(Debug, Clone)]
pub struct RandomDelay {
    rng: StdRng,
    max_ms: u64,
}

impl Default for RandomDelay {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DELAY)
    }
}

impl RandomDelay {
    /// Create a random source seeded from the operating system.
    ///
    /// A `max` below one millisecond is treated as one millisecond.
    pub fn new(max: Duration) -> Self {
        Self::with_rng(max, StdRng::from_os_rng())
    }

    /// Create a reproducible random source.
    pub fn seeded(max: Duration, seed: u64) -> Self {
        Self::with_rng(max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(max: Duration, rng: StdRng) -> Self {
        let max_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX).max(1);
        Self { rng, max_ms }
    }

    /// Get the exclusive upper bound.
    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }
}

impl DelaySource for RandomDelay {
    fn next_delay(&mut self) -> Duration {
        Duration::from_millis(self.rng.random_range(0..self.max_ms))
    }
}

/// Replays a fixed list of delays, wrapping around at the end.
///
/// An empty script yields zero delays.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDelay {
    delays: Vec<Duration>,
    next: usize,
}

impl ScriptedDelay {
    /// Create a script from durations.
    pub fn new(delays: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            delays: delays.into_iter().collect(),
            next: 0,
        }
    }

    /// Create a script from milliseconds.
    pub fn from_millis(millis: &[u64]) -> Self {
        Self::new(millis.iter().copied().map(Duration::from_millis))
    }

    /// A script that always returns `delay`.
    pub fn constant(delay: Duration) -> Self {
        Self::new([delay])
    }
}

impl DelaySource for ScriptedDelay {
    fn next_delay(&mut self) -> Duration {
        if self.delays.is_empty() {
            return Duration::ZERO;
        }

        let delay = self.delays[self.next % self.delays.len()];
        self.next += 1;
        delay
    }
}
