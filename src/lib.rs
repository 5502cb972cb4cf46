//! # seedline - Terminal Client for a Keyword Research Backend
//!
//! Collects a product category and target platform, posts them to a keyword
//! generation backend and shows the results in four tabs: seed keywords,
//! competitor gaps, question keywords and a written report.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌─────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│ Models  │
//! │             │              │              │              │         │
//! │ - Terminal  │              │ - Panels     │              │ - Form  │
//! │ - HTML      │              │ - Requests   │              │ - Tabs  │
//! │   export    │              │ - Results    │              │ - Bodies│
//! └─────────────┘              └──────────────┘              └─────────┘
//!                                      ▲
//!                                      │ Commands
//!                                      ▼
//!                               ┌──────────────┐    POST    ┌─────────┐
//!                               │  Controller  │───────────▶│ Backend │
//!                               │ - Input      │◄───────────│         │
//!                               │ - Event Loop │  channel   └─────────┘
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
