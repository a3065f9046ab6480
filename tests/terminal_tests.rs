//! Tests for the terminal module: escape encoding and the arbiter under tasks.

use std::sync::Arc;

use loaders::terminal::{
    AnsiCursor, CursorOp, CursorSurface, TerminalArbiter, CLEAR_LINE, RESTORE_CURSOR,
    SAVE_CURSOR,
};

mod common;
use common::helpers::*;

#[test]
fn test_escape_constants() {
    assert_eq!(SAVE_CURSOR, "\u{1b}[s");
    assert_eq!(RESTORE_CURSOR, "\u{1b}[u");
    assert_eq!(CLEAR_LINE, "\r\u{1b}[K");
}

#[test]
fn test_ansi_cursor_over_shared_buffer() {
    let buffer = SharedBuffer::new();
    let mut cursor = AnsiCursor::new(buffer.clone());

    cursor.write_text("\n\n\n");
    cursor.move_cursor_relative(-3);
    cursor.save_cursor();
    cursor.move_cursor_relative(2);
    cursor.clear_current_line();
    cursor.write_text("third");
    cursor.restore_cursor();
    cursor.move_cursor_relative(3);

    assert_eq!(
        buffer.contents(),
        "\n\n\n\x1b[3A\x1b[s\x1b[2B\r\x1b[Kthird\x1b[u\x1b[3B"
    );
}

#[test]
fn test_recording_surface_keeps_order() {
    let mut surface = RecordingSurface::new();
    surface.save_cursor();
    surface.move_cursor_relative(-1);
    surface.write_text("x");

    assert_eq!(
        surface.ops(),
        vec![
            CursorOp::Save,
            CursorOp::Move(-1),
            CursorOp::Write("x".into())
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_arbiter_keeps_sequences_whole_across_tasks() {
    let surface = RecordingSurface::new();
    let arbiter = Arc::new(TerminalArbiter::new(surface.clone()));

    let tasks: Vec<_> = (1..=6usize)
        .map(|line| {
            let arbiter = arbiter.clone();
            tokio::spawn(async move {
                for progress in 0..50 {
                    arbiter.with_exclusive_access(|surface| {
                        surface.save_cursor();
                        surface.move_cursor_relative(line as isize - 1);
                        surface.clear_current_line();
                        surface.write_text(&format!("Loader {}: [{}>] 0ms", line, "=".repeat(progress)));
                        surface.restore_cursor();
                    });
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    let ops = surface.ops();
    assert_eq!(ops.len(), 6 * 50 * 5);
    for seq in ops.chunks(5) {
        match seq {
            [CursorOp::Save, CursorOp::Move(down), CursorOp::ClearLine, CursorOp::Write(text), CursorOp::Restore] => {
                assert_eq!(parse_frame(text).line as isize - 1, *down);
            }
            other => panic!("Interleaved sequence: {:?}", other),
        }
    }
}
