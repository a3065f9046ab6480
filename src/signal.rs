//! Listening for interrupt and terminate requests.
//!
//! Both requests map to the same event. Handlers are installed eagerly by
//! [`Shutdown::install`] so that a failure surfaces before any loader starts.

use crate::Result;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};
use tracing::info;

/// Installed interrupt listeners.
#[derive(Debug)]
pub struct Shutdown {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
}

impl Shutdown {
    /// Install the listeners. Must be called from within a Tokio runtime.
    pub fn install() -> Result<Self> {
        #[cfg(unix)]
        {
            Ok(Self {
                interrupt: signal(SignalKind::interrupt())?,
                terminate: signal(SignalKind::terminate())?,
            })
        }

        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

    /// Wait for the first interrupt or terminate request.
    pub async fn recv(mut self) {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = self.interrupt.recv() => info!("Received interrupt, stopping loaders"),
                _ = self.terminate.recv() => info!("Received terminate, stopping loaders"),
            }
        }

        #[cfg(not(unix))]
        {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl-C, stopping loaders"),
                Err(e) => {
                    tracing::warn!("Ctrl-C listener failed: {}", e);
                    std::future::pending::<()>().await
                }
            }
        }
    }
}
