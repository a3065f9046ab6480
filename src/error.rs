//! Error handling for the loaders library.
//!
//! Interruption is not an error: a run that was cancelled by a signal still
//! returns `Ok` with an [`Outcome::Interrupted`](crate::Outcome) report. The
//! variants below cover the few things that can actually go wrong around the
//! animation itself.

use std::io;
use thiserror::Error;

/// Errors that can happen when using loaders.
#[derive(Error, Debug)]
pub enum Error {
    /// The animation parameters were rejected.
    ///
    /// Returned when a width, worker count or maximum delay of zero is requested.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The interrupt listener could not be installed.
    #[error("Failed to install signal handler")]
    Signal {
        #[from]
        source: io::Error,
    },

    /// A worker task panicked or was aborted before it could report back.
    #[error("Worker task failed")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
}

/// Result type alias for operations that can fail with a loaders error.
pub type Result<T> = std::result::Result<T, Error>;
