//! # I/O Abstraction Layer
//!
//! Provides trait abstractions for input/output streams so the controller
//! can be driven without a real terminal.
//!
//! ## Architecture
//!
//! ```text
//! Production:  AppController ──▶ StdinEventStream     ──▶ stdin reader thread
//!                            ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     AppController ──▶ MockEventStream      ──▶ VecDeque<InputEvent>
//!                            ──▶ MockRenderStream     ──▶ shared Vec<u8>
//! ```

use crate::repl::events::InputEvent;
use anyhow::Result;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream};
pub use terminal::{StdinEventStream, TerminalRenderStream};

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

/// Input event stream abstraction
pub trait EventStream: Send {
    /// Check whether an event is available within the timeout
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event; call after `poll` returned true
    fn read(&mut self) -> Result<InputEvent>;
}

/// Output render stream abstraction
pub trait RenderStream: Write + Send {
    /// Clear the entire screen
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to specific position (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Get terminal size as (width, height)
    fn get_size(&self) -> Result<TerminalSize>;
}
