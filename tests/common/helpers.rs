use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use loaders::loader::{DelaySource, ScriptedDelay};
use loaders::terminal::{CursorOp, CursorSurface};
use loaders::OrchestratorBuilder;

// === Surfaces ===

/// A cursor surface that keeps every action for later inspection
#[derive(Clone, Default)]
pub struct RecordingSurface {
    ops: Arc<Mutex<Vec<CursorOp>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded actions
    pub fn ops(&self) -> Vec<CursorOp> {
        self.ops.lock().unwrap().clone()
    }
}

impl CursorSurface for RecordingSurface {
    fn apply(&mut self, op: CursorOp) {
        self.ops.lock().unwrap().push(op);
    }
}

/// An in-memory writer shared between a surface and the test
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("Output should be UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// === Builders ===

/// Creates a builder recording into `surface`, with every loader replaying `delays`
pub fn create_recorded_builder(surface: &RecordingSurface, delays: &[u64]) -> OrchestratorBuilder {
    let delays = delays.to_vec();
    OrchestratorBuilder::new()
        .surface(surface.clone())
        .delays(move |_| Box::new(ScriptedDelay::from_millis(&delays)) as Box<dyn DelaySource>)
}

// === Frame Parsing ===

/// The parts of a drawn frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrame {
    pub line: usize,
    pub filled: usize,
    pub complete: bool,
    pub delay_ms: u64,
}

/// Parses `Loader {line}: [{bar}] [✓ ]{d}ms`
pub fn parse_frame(text: &str) -> ParsedFrame {
    let rest = text.strip_prefix("Loader ").expect("Frame should start with 'Loader '");
    let (line, rest) = rest.split_once(':').expect("Frame should have a line label");
    let open = rest.find('[').expect("Frame should have a bar");
    let close = rest.find(']').expect("Frame should close its bar");
    let bar = &rest[open + 1..close];
    let tail = rest[close + 1..].trim();
    let complete = tail.starts_with('✓');
    let delay = tail
        .trim_start_matches('✓')
        .trim()
        .strip_suffix("ms")
        .expect("Frame should end with a delay");

    ParsedFrame {
        line: line.parse().expect("Line label should be a number"),
        filled: bar.matches('=').count(),
        complete,
        delay_ms: delay.parse().expect("Delay should be a number"),
    }
}

/// A recorded run split into its phases
#[derive(Debug)]
pub struct RecordedRun {
    /// Frames in drawing order
    pub frames: Vec<ParsedFrame>,
    /// Text printed below the region, if any
    pub status: Option<String>,
}

impl RecordedRun {
    /// Frames grouped by line, in drawing order
    pub fn by_line(&self) -> BTreeMap<usize, Vec<ParsedFrame>> {
        let mut lines: BTreeMap<usize, Vec<ParsedFrame>> = BTreeMap::new();
        for frame in &self.frames {
            lines.entry(frame.line).or_default().push(frame.clone());
        }
        lines
    }
}

/// Splits the actions of an orchestrator run into setup, render sequences and report.
///
/// Panics if the region is not reserved and released as expected, or if any
/// render sequence is broken up by another action.
pub fn split_run(ops: &[CursorOp], rows: usize) -> RecordedRun {
    assert!(ops.len() >= 3, "Run should at least reserve and release its region");
    assert_eq!(ops[0], CursorOp::Write("\n".repeat(rows)));
    assert_eq!(ops[1], CursorOp::Move(-(rows as isize)));

    let (body, status) = match &ops[ops.len() - 2..] {
        [CursorOp::Move(down), CursorOp::Write(text)] if *down == rows as isize => {
            (&ops[2..ops.len() - 2], Some(text.clone()))
        }
        _ => {
            assert_eq!(ops[ops.len() - 1], CursorOp::Move(rows as isize));
            (&ops[2..ops.len() - 1], None)
        }
    };

    assert_eq!(body.len() % 5, 0, "Render sequences should have five actions");
    let frames = body
        .chunks(5)
        .map(|seq| match seq {
            [CursorOp::Save, CursorOp::Move(down), CursorOp::ClearLine, CursorOp::Write(text), CursorOp::Restore] =>
            {
                let frame = parse_frame(text);
                assert_eq!(frame.line as isize - 1, *down, "Frame drawn on the wrong row");
                frame
            }
            other => panic!("Interleaved render sequence: {:?}", other),
        })
        .collect();

    RecordedRun { frames, status }
}

/// Asserts that a loader's frames never go backwards and stay within `width`
pub fn assert_monotonic(frames: &[ParsedFrame], width: usize) {
    for pair in frames.windows(2) {
        assert!(
            pair[1].filled >= pair[0].filled,
            "Progress went backwards on line {}",
            pair[0].line
        );
    }
    for frame in frames {
        assert!(frame.filled <= width, "Progress exceeded width on line {}", frame.line);
        assert_eq!(frame.complete, frame.filled == width);
    }
}
