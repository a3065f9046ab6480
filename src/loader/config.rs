//! Immutable animation parameters.

use super::delay::DEFAULT_MAX_DELAY;
use crate::{Error, Result};

use std::time::Duration;

/// Default number of cells in a bar.
pub const DEFAULT_WIDTH: usize = 50;
/// Default number of concurrent loaders.
pub const DEFAULT_WORKERS: usize = 10;

/// Parameters shared by every loader of a run.
///
/// All fields are validated to be non-zero on construction.
///
/// ```rust
/// use loaders::loader::AnimationConfig;
/// use std::time::Duration;
///
/// let config = AnimationConfig::new(20, 4)?.with_max_delay(Duration::from_millis(50))?;
/// assert_eq!(config.width(), 20);
/// assert_eq!(config.workers(), 4);
///
/// assert!(AnimationConfig::new(0, 4).is_err());
/// # Ok::<(), loaders::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    width: usize,
    workers: usize,
    max_delay: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            workers: DEFAULT_WORKERS,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

impl AnimationConfig {
    /// Create a config with the default maximum delay.
    pub fn new(width: usize, workers: usize) -> Result<Self> {
        let config = Self {
            width,
            workers,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the exclusive upper bound of frame delays.
    pub fn with_max_delay(self, max_delay: Duration) -> Result<Self> {
        let config = Self { max_delay, ..self };
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidConfig("width must be greater than zero".into()));
        }
        if self.workers == 0 {
            return Err(Error::InvalidConfig(
                "worker count must be greater than zero".into(),
            ));
        }
        if self.max_delay.as_millis() == 0 {
            return Err(Error::InvalidConfig(
                "maximum delay must be at least one millisecond".into(),
            ));
        }
        Ok(())
    }

    /// Get the number of cells in a bar.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the number of loaders.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Get the exclusive upper bound of frame delays.
    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }
}
