//! Cursor primitives and their ANSI/VT100 encoding.
//!
//! Encoding goes through `crossterm` commands queued on the writer.
//!
//! Every primitive is a single [`CursorOp`] applied to a [`CursorSurface`].
//! Surfaces never report failures to their callers: the [`AnsiCursor`] logs a
//! failed write and moves on, since a lost frame is not a correctness issue for
//! an animation.
//!
//! # Examples
//!
//! ```rust
//! use loaders::terminal::{AnsiCursor, CursorSurface};
//!
//! let mut cursor = AnsiCursor::new(Vec::new());
//! cursor.save_cursor();
//! cursor.move_cursor_relative(2);
//! cursor.clear_current_line();
//! cursor.write_text("hello");
//! cursor.restore_cursor();
//!
//! assert_eq!(cursor.into_inner(), b"\x1b[s\x1b[2B\r\x1b[Khello\x1b[u");
//! ```

use crossterm::cursor::{MoveDown, MoveUp};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{Command, QueueableCommand};
use std::fmt;
use std::io::{self, Write};
use tracing::warn;

/// Save the cursor position.
pub const SAVE_CURSOR: &str = "\x1b[s";
/// Restore the last saved cursor position.
pub const RESTORE_CURSOR: &str = "\x1b[u";
/// Return to column 0 and erase to the end of the line.
pub const CLEAR_LINE: &str = "\r\x1b[K";

/// `CSI s`. Crossterm's `SavePosition` emits the DEC `ESC 7` form instead.
#[derive(Debug, Clone, Copy)]
struct SaveCursor;

impl Command for SaveCursor {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str(SAVE_CURSOR)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "CSI s needs an ANSI terminal",
        ))
    }
}

/// `CSI u`, the counterpart of [`SaveCursor`].
#[derive(Debug, Clone, Copy)]
struct RestoreCursor;

impl Command for RestoreCursor {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str(RESTORE_CURSOR)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "CSI u needs an ANSI terminal",
        ))
    }
}

/// A single cursor action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorOp {
    /// Save the cursor position.
    Save,
    /// Restore the saved cursor position.
    Restore,
    /// Move the cursor by a number of rows; positive is down, negative is up.
    Move(isize),
    /// Clear the current line.
    ClearLine,
    /// Write text at the cursor.
    Write(String),
}

/// Something that cursor actions can be issued against.
///
/// Only [`apply`](CursorSurface::apply) is required; the named primitives are
/// thin wrappers around it.
pub trait CursorSurface {
    /// Perform one cursor action.
    fn apply(&mut self, op: CursorOp);

    /// Save the cursor position.
    fn save_cursor(&mut self) {
        self.apply(CursorOp::Save);
    }

    /// Restore the saved cursor position.
    fn restore_cursor(&mut self) {
        self.apply(CursorOp::Restore);
    }

    /// Move the cursor by `rows`; positive is down, negative is up.
    fn move_cursor_relative(&mut self, rows: isize) {
        self.apply(CursorOp::Move(rows));
    }

    /// Clear the line the cursor is on.
    fn clear_current_line(&mut self) {
        self.apply(CursorOp::ClearLine);
    }

    /// Write text at the cursor.
    fn write_text(&mut self, text: &str) {
        self.apply(CursorOp::Write(text.to_owned()));
    }
}

/// A surface that encodes actions as ANSI escape sequences on a writer.
///
/// Each action is flushed as soon as it is written.
#[derive(Debug)]
pub struct AnsiCursor<W: Write> {
    target: W,
}

impl AnsiCursor<io::Stdout> {
    /// A surface writing to the process' standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiCursor<W> {
    /// Wrap a writer.
    pub fn new(target: W) -> Self {
        Self { target }
    }

    /// Get the underlying writer back.
    pub fn into_inner(self) -> W {
        self.target
    }
}

impl<W: Write> AnsiCursor<W> {
    /// Queue the commands for one action.
    ///
    /// A zero-row move queues nothing: terminals read `ESC[0B` as a move of
    /// one row.
    fn queue_op(&mut self, op: &CursorOp) -> io::Result<()> {
        match op {
            CursorOp::Save => {
                self.target.queue(SaveCursor)?;
            }
            CursorOp::Restore => {
                self.target.queue(RestoreCursor)?;
            }
            CursorOp::Move(0) => {}
            CursorOp::Move(rows) => {
                let n = u16::try_from(rows.unsigned_abs()).unwrap_or(u16::MAX);
                if *rows > 0 {
                    self.target.queue(MoveDown(n))?;
                } else {
                    self.target.queue(MoveUp(n))?;
                }
            }
            CursorOp::ClearLine => {
                self.target
                    .queue(Print('\r'))?
                    .queue(Clear(ClearType::UntilNewLine))?;
            }
            CursorOp::Write(text) => {
                self.target.queue(Print(text))?;
            }
        }
        Ok(())
    }
}

impl<W: Write> CursorSurface for AnsiCursor<W> {
    fn apply(&mut self, op: CursorOp) {
        if op == CursorOp::Move(0) {
            return;
        }

        let written = self.queue_op(&op).and_then(|_| self.target.flush());
        if let Err(e) = written {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

/// A surface that drops every action.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl CursorSurface for NullSurface {
    fn apply(&mut self, _op: CursorOp) {}
}
