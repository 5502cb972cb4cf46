//! # Mock I/O Implementations for Testing
//!
//! Provides mock implementations of EventStream and RenderStream traits
//! for testing without terminal dependencies.

use super::{EventStream, RenderStream, TerminalSize};
use crate::repl::events::InputEvent;
use anyhow::Result;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock event stream for testing
///
/// Replays pre-programmed lines, then reports end of input.
pub struct MockEventStream {
    events: VecDeque<InputEvent>,
}

impl MockEventStream {
    /// Create a new mock event stream with pre-programmed events
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Create a stream replaying the given command lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            lines
                .into_iter()
                .map(|line| InputEvent::Line(line.into()))
                .collect(),
        )
    }

    /// Create an empty mock event stream
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Add an event to the stream
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(true)
    }

    fn read(&mut self) -> Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::EndOfInput))
    }
}

/// Type alias for the shared output buffer
type OutputBuffer = Arc<Mutex<Vec<u8>>>;

/// Mock render stream for testing
///
/// Captures everything written; clones share the same buffer so a test can
/// keep one handle while the controller owns the other.
#[derive(Clone)]
pub struct MockRenderStream {
    buffer: OutputBuffer,
    terminal_size: TerminalSize,
    clear_count: Arc<Mutex<usize>>,
}

impl MockRenderStream {
    /// Create a new mock render stream
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    /// Create a mock render stream with specific terminal size
    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(Vec::new())),
            terminal_size: size,
            clear_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Everything written so far, as text
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buffer).to_string()
    }

    /// Text written since the last screen clear
    pub fn last_frame(&self) -> String {
        let contents = self.contents();
        match contents.rfind(CLEAR_MARKER) {
            Some(index) => contents[index + CLEAR_MARKER.len()..].to_string(),
            None => contents,
        }
    }

    /// Number of times the screen was cleared
    pub fn clear_count(&self) -> usize {
        *self.clear_count.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Written into the buffer on every clear so frames can be told apart
const CLEAR_MARKER: &str = "\u{0}CLEAR\u{0}";

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        *self.clear_count.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        self.write_all(CLEAR_MARKER.as_bytes())?;
        Ok(())
    }

    fn move_cursor(&mut self, _x: u16, _y: u16) -> Result<()> {
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }
}
