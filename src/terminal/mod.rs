//! Terminal module containing the cursor primitives and the lock around them.
//!
//! # Overview
//!
//! The terminal module is organized into two main components:
//!
//! - `cursor` - Cursor actions, their ANSI encoding, and the surfaces they run on
//! - `arbiter` - Mutual exclusion for multi-step cursor sequences
//!
//! Loaders draw by saving the cursor, moving to their own row, clearing it,
//! writing a frame and restoring the cursor. Those five steps must land on the
//! terminal back to back, so every sequence runs inside
//! [`TerminalArbiter::with_exclusive_access`].
//!
//! # Examples
//!
//! ## Drawing on a Reserved Row
//!
//! ```rust
//! use loaders::terminal::{AnsiCursor, CursorSurface, TerminalArbiter};
//!
//! let arbiter = TerminalArbiter::new(AnsiCursor::stdout());
//! arbiter.with_exclusive_access(|surface| {
//!     surface.save_cursor();
//!     surface.move_cursor_relative(3);
//!     surface.clear_current_line();
//!     surface.write_text("row four");
//!     surface.restore_cursor();
//! });
//! ```
//!
//! ## Hidden Output
//!
//! ```rust
//! use loaders::terminal::TerminalArbiter;
//!
//! // Every cursor action is discarded
//! let arbiter = TerminalArbiter::hidden();
//! ```

pub(crate) mod arbiter;
pub(crate) mod cursor;

pub use arbiter::TerminalArbiter;
pub use cursor::{AnsiCursor, CursorOp, CursorSurface, NullSurface};
pub use cursor::{CLEAR_LINE, RESTORE_CURSOR, SAVE_CURSOR};
