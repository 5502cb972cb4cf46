//! # Event System
//!
//! Types shared between models, view models, views and the controller.

pub mod model_events;
pub mod types;
pub mod view_events;

pub use model_events::ModelEvent;
pub use types::{Action, FormField, RequestToken, TabId};
pub use view_events::{InputEvent, ViewEvent};
