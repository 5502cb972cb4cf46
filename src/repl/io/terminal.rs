//! # Terminal I/O Implementations
//!
//! Production implementations of the I/O abstractions: line input from stdin
//! and crossterm-backed output. All crossterm use is isolated to this module.

use super::{EventStream, RenderStream, TerminalSize};
use crate::repl::events::InputEvent;
use anyhow::Result;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

/// Size assumed when stdout is not a terminal
const FALLBACK_SIZE: TerminalSize = (80, 24);

/// Line-based event stream fed by a background stdin reader
///
/// Stdin is read on a dedicated thread, started on the first poll, so polling
/// never blocks longer than the requested timeout. EOF becomes
/// [`InputEvent::EndOfInput`].
pub struct StdinEventStream {
    receiver: Option<Receiver<InputEvent>>,
    pending: Option<InputEvent>,
}

impl StdinEventStream {
    pub fn new() -> Self {
        Self {
            receiver: None,
            pending: None,
        }
    }

    fn spawn_reader() -> Receiver<InputEvent> {
        let (sender, receiver) = mpsc::channel();

        std::thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if sender.send(InputEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to read stdin: {}", e);
                        break;
                    }
                }
            }
            let _ = sender.send(InputEvent::EndOfInput);
        });

        receiver
    }

    fn receiver(&mut self) -> &Receiver<InputEvent> {
        self.receiver.get_or_insert_with(Self::spawn_reader)
    }
}

impl Default for StdinEventStream {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStream for StdinEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        if self.pending.is_some() {
            return Ok(true);
        }
        match self.receiver().recv_timeout(timeout) {
            Ok(event) => {
                self.pending = Some(event);
                Ok(true)
            }
            Err(RecvTimeoutError::Timeout) => Ok(false),
            Err(RecvTimeoutError::Disconnected) => {
                self.pending = Some(InputEvent::EndOfInput);
                Ok(true)
            }
        }
    }

    fn read(&mut self) -> Result<InputEvent> {
        if let Some(event) = self.pending.take() {
            return Ok(event);
        }
        Ok(self.receiver().recv().unwrap_or(InputEvent::EndOfInput))
    }
}

/// Terminal-based render stream using crossterm
pub struct TerminalRenderStream<W: Write> {
    writer: W,
}

impl TerminalRenderStream<io::Stdout> {
    /// Create a new terminal render stream using stdout
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl Default for TerminalRenderStream<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderStream<W> {
    /// Create a terminal render stream with custom writer
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.writer, Clear(ClearType::All)).map_err(anyhow::Error::from)
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        execute!(self.writer, cursor::MoveTo(x, y)).map_err(anyhow::Error::from)
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(terminal::size().unwrap_or(FALLBACK_SIZE))
    }
}
