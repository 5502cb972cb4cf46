//! # Views
//!
//! Turn ViewModel state into output: ANSI terminal frames and HTML export.

pub mod ansi_escape_codes;
pub mod html_export;
pub mod terminal_renderer;

pub use html_export::{export_html, render_html_page};
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
