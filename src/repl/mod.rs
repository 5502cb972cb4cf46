//! # seedline REPL
//!
//! MVVM front end for the keyword backend.
//!
//! ## Layers
//!
//! - `models`: form values, request bodies, response shapes, tab layout
//! - `view_models`: panel visibility, in-flight request, rendering results into tabs
//! - `views`: ANSI terminal frames and HTML export
//! - `commands`: one type per input command, dispatched by the registry
//! - `controllers`: the event loop tying input, services and views together
//! - `services`: HTTP access to the backend
//! - `io`: stdin/terminal streams and their test doubles

pub mod commands;
pub mod controllers;
pub mod error;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod utils;
pub mod view_models;
pub mod views;

// Re-export main types for easy access
pub use controllers::AppController;
pub use error::RequestError;
pub use events::{Action, FormField, ModelEvent, RequestToken, TabId, ViewEvent};
pub use services::{HttpResponseMessage, KeywordService, Services};
pub use utils::highlight_json;
pub use view_models::{PanelVisibility, UiState, ViewModel};
