//! Text of a single loader frame.

use std::fmt;

/// Marker printed after a finished bar.
pub const COMPLETION_MARK: &str = "✓";

/// One rendering of a loader at a given progress.
///
/// ```rust
/// use loaders::loader::Frame;
///
/// assert_eq!(Frame::new(2, 3, 5, 17).to_string(), "Loader 2: [===>  ] 17ms");
/// assert_eq!(Frame::new(1, 5, 5, 4).to_string(), "Loader 1: [=====] ✓ 4ms");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    line: usize,
    progress: usize,
    width: usize,
    delay_ms: u64,
}

impl Frame {
    /// Create a frame. `progress` is capped at `width`.
    pub fn new(line: usize, progress: usize, width: usize, delay_ms: u64) -> Self {
        Self {
            line,
            progress: progress.min(width),
            width,
            delay_ms,
        }
    }

    /// Get the 1-based row of the loader.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the frame's progress.
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Get the delay annotation in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Whether this is the terminal frame of the bar.
    pub fn is_complete(&self) -> bool {
        self.progress == self.width
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            write!(
                f,
                "Loader {}: [{}] {} {}ms",
                self.line,
                "=".repeat(self.width),
                COMPLETION_MARK,
                self.delay_ms
            )
        } else {
            write!(
                f,
                "Loader {}: [{}>{}] {}ms",
                self.line,
                "=".repeat(self.progress),
                " ".repeat(self.width - self.progress),
                self.delay_ms
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame() {
        let frame = Frame::new(1, 0, 5, 0);
        assert!(!frame.is_complete());
        assert_eq!(frame.to_string(), "Loader 1: [>     ] 0ms");
    }

    #[test]
    fn test_in_progress_frames_keep_their_width() {
        for progress in 0..5 {
            let text = Frame::new(3, progress, 5, 120).to_string();
            let bar = &text[text.find('[').unwrap()..=text.find(']').unwrap()];
            assert_eq!(bar.chars().count(), 5 + 3);
            assert_eq!(bar.matches('=').count(), progress);
        }
    }

    #[test]
    fn test_complete_frame() {
        let frame = Frame::new(1, 5, 5, 199);
        assert!(frame.is_complete());
        assert_eq!(frame.to_string(), "Loader 1: [=====] ✓ 199ms");
    }

    #[test]
    fn test_progress_is_capped() {
        let frame = Frame::new(4, 9, 5, 1);
        assert_eq!(frame.progress(), 5);
        assert!(frame.is_complete());
    }

    #[test]
    fn test_getters() {
        let frame = Frame::new(7, 2, 50, 33);
        assert_eq!(frame.line(), 7);
        assert_eq!(frame.progress(), 2);
        assert_eq!(frame.delay_ms(), 33);
    }
}
