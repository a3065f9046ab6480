//! Serialized access to a shared cursor surface.
//!
//! # Examples
//!
//! ```rust
//! use loaders::terminal::{AnsiCursor, CursorSurface, TerminalArbiter};
//! use std::sync::Arc;
//!
//! let arbiter = Arc::new(TerminalArbiter::new(AnsiCursor::new(Vec::new())));
//!
//! arbiter.with_exclusive_access(|surface| {
//!     surface.save_cursor();
//!     surface.move_cursor_relative(1);
//!     surface.clear_current_line();
//!     surface.write_text("Loader 2: [>  ] 12ms");
//!     surface.restore_cursor();
//! });
//! ```

use super::cursor::{CursorSurface, NullSurface};

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Owns the cursor surface and hands it out to one caller at a time.
pub struct TerminalArbiter {
    surface: Mutex<Box<dyn CursorSurface + Send>>,
}

impl fmt::Debug for TerminalArbiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalArbiter").finish_non_exhaustive()
    }
}

impl TerminalArbiter {
    /// Create an arbiter guarding `surface`.
    pub fn new(surface: impl CursorSurface + Send + 'static) -> Self {
        Self {
            surface: Mutex::new(Box::new(surface)),
        }
    }

    /// An arbiter over a surface that discards everything.
    pub fn hidden() -> Self {
        Self::new(NullSurface)
    }

    /// Run `action` while holding the terminal lock.
    ///
    /// The lock is released on every exit path. A panic inside `action`
    /// poisons the mutex; later callers recover the surface and carry on, as a
    /// half-drawn frame is harmless.
    pub fn with_exclusive_access<R>(&self, action: impl FnOnce(&mut dyn CursorSurface) -> R) -> R {
        let mut surface = self.surface.lock().unwrap_or_else(PoisonError::into_inner);
        action(&mut **surface)
    }
}
