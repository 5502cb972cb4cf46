//! # Core ViewModel
//!
//! Owns all display state: form, tabs, panel visibility, in-flight request
//! and status line. Views read from it; commands and the controller mutate it
//! through the methods spread over the sibling `*_manager` modules.

use crate::repl::events::{Action, FormField, ModelEvent, RequestToken, ViewEvent};
use crate::repl::models::{FormModel, RequestOptions, StatusLine, TabModel};

/// Coarse state of the page, derived from the three panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    ShowingResults,
    ShowingError,
}

/// Which of the three independent panels are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelVisibility {
    pub loading: bool,
    pub error: bool,
    pub results: bool,
}

/// Request currently waiting on the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct InFlight {
    pub(super) token: RequestToken,
    pub(super) action: Action,
}

/// Main view model
pub struct ViewModel {
    pub(super) form: FormModel,
    pub(super) tabs: TabModel,
    pub(super) status_line: StatusLine,
    pub(super) request_options: RequestOptions,

    pub(super) loading: bool,
    pub(super) error_message: Option<String>,
    pub(super) results_visible: bool,

    pub(super) in_flight: Option<InFlight>,
    pub(super) last_token: RequestToken,

    pub(super) pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::with_tabs(TabModel::default())
    }

    /// View model over a custom tab layout
    pub fn with_tabs(tabs: TabModel) -> Self {
        Self {
            form: FormModel::new(),
            tabs,
            status_line: StatusLine::new(),
            request_options: RequestOptions::default(),
            loading: false,
            error_message: None,
            results_visible: false,
            in_flight: None,
            last_token: RequestToken::new(0),
            pending_view_events: Vec::new(),
        }
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn tabs(&self) -> &TabModel {
        &self.tabs
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    pub fn request_options(&self) -> &RequestOptions {
        &self.request_options
    }

    pub fn set_request_options(&mut self, options: RequestOptions) {
        self.request_options = options;
    }

    /// Store profile information for display
    pub fn set_profile_info(&mut self, profile_name: String, base_url: String) {
        self.status_line.set_profile_info(profile_name, base_url);
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    /// Update a form field
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> ModelEvent {
        let event = self.form.set(field, value);
        tracing::debug!("Form field {} updated", field.label());
        self.emit_view_event(ViewEvent::FullRedrawRequired);
        event
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) -> ModelEvent {
        let message = message.into();
        self.status_line.set_status_message(message.clone());
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
        ModelEvent::StatusMessageSet { message }
    }

    pub fn clear_status_message(&mut self) {
        if self.status_line.status_message().is_some() {
            self.status_line.clear_status_message();
            self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
        }
    }

    pub fn visibility(&self) -> PanelVisibility {
        PanelVisibility {
            loading: self.loading,
            error: self.error_message.is_some(),
            results: self.results_visible,
        }
    }

    /// Loading wins over error, error over results
    pub fn ui_state(&self) -> UiState {
        if self.loading {
            UiState::Loading
        } else if self.error_message.is_some() {
            UiState::ShowingError
        } else if self.results_visible {
            UiState::ShowingResults
        } else {
            UiState::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Text of the error banner, if shown
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_results_visible(&self) -> bool {
        self.results_visible
    }

    pub(super) fn emit_view_event(&mut self, event: ViewEvent) {
        tracing::trace!("View event emitted: {:?}", event);
        self.pending_view_events.push(event);
    }

    /// Take all view events emitted since the last call
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
