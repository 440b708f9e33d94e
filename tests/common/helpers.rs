#![allow(dead_code)]

use glyphbar::{Bar, BarBuilder};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

// Common test constants
pub const FILL: &str = "█";
pub const TRACK: &str = " ";

/// In-memory output stream that can be inspected while a bar writes to it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    /// Number of live handles on the buffer, this one included.
    pub fn handles(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// Every repaint written so far, without its leading carriage return.
    pub fn frames(&self) -> Vec<String> {
        self.contents()
            .split('\r')
            .filter(|frame| !frame.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn last_frame(&self) -> Option<String> {
        self.frames().pop()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// === Bar Creation Helpers ===

/// Creates an uncolored builder writing into a fresh buffer.
pub fn create_test_builder(total: i64) -> (BarBuilder, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let builder = Bar::builder(total)
        .colors_enabled(false)
        .output(buffer.clone());
    (builder, buffer)
}

/// Creates an uncolored bar with default options writing into a fresh buffer.
pub fn create_test_bar(total: i64) -> (Bar, SharedBuffer) {
    let (builder, buffer) = create_test_builder(total);
    (builder.build(), buffer)
}

/// The glyph segment with `filled` default fill cells out of `cells`.
pub fn glyph_segment(filled: usize, cells: usize) -> String {
    format!("[{}{}]", FILL.repeat(filled), TRACK.repeat(cells - filled))
}

/// Polls `condition` every 10ms until it holds or `timeout` runs out.
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    condition()
}

// === Assertion Helpers ===

/// Asserts the derived fields of a bar.
pub fn assert_progress(bar: &Bar, percent: i64, fill_count: usize) {
    assert_eq!(bar.percent(), percent, "percent mismatch");
    assert_eq!(bar.fill_count(), fill_count, "fill count mismatch");
}

/// Asserts that a repaint is a single in-place line.
pub fn assert_in_place_frame(frame: &str) {
    assert!(!frame.contains('\n'), "frame should not contain a newline: {frame:?}");
    assert!(frame.ends_with("  "), "frame should end with padding: {frame:?}");
}
