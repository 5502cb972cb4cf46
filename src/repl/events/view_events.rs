//! # View Events
//!
//! Events related to view updates and user input.
//! These events drive screen refreshing and carry user interactions.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Whole screen must be redrawn (content, visibility or tab change)
    FullRedrawRequired,

    /// Only the status bar changed
    StatusBarUpdateRequired,
}

/// Input events from the user or the input source
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// One line of command input
    Line(String),

    /// Input source closed (EOF on stdin, exhausted test script)
    EndOfInput,
}
