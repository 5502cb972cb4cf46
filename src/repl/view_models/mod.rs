//! # ViewModel Module
//!
//! The ViewModel is split into focused modules, each adding `impl ViewModel`
//! blocks for one concern:
//!
//! - `core`: struct definition, panel visibility, view event queue
//! - `request_manager`: request lifecycle and in-flight guard
//! - `render_manager`: keyword and report renderers
//! - `tab_manager`: tab switching

pub mod core;
pub mod render_manager;
pub mod request_manager;
pub mod tab_manager;


pub use self::core::{PanelVisibility, UiState, ViewModel};
pub use request_manager::PendingRequest;
