//! # Tab Management
//!
//! Switching the visible results tab.

use crate::repl::events::{ModelEvent, TabId, ViewEvent};
use crate::repl::view_models::core::ViewModel;
use anyhow::Result;

impl ViewModel {
    /// Make `id` the only visible tab
    pub fn show_tab(&mut self, id: &TabId) -> Result<ModelEvent> {
        let event = self.tabs.activate(id)?;
        tracing::debug!("Tab switched to {}", id);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
        Ok(event)
    }

    pub fn active_tab(&self) -> Option<&TabId> {
        self.tabs.active()
    }
}
