//! # Utilities
//!
//! Pure helpers shared by view models and views.

pub mod json_highlight;

pub use json_highlight::{
    escape_html, highlight_json, markup_text, parse_markup, tokenize, unescape_html, Segment,
    TokenClass,
};
