//! # Model Events
//!
//! Events emitted when data models change state.
//! Commands return them so the controller can log and report what happened.

use super::types::{Action, FormField, RequestToken, TabId};

/// Events emitted when models change
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// A form input changed
    FieldChanged { field: FormField, value: String },

    /// A request left for the backend
    RequestStarted {
        action: Action,
        token: RequestToken,
    },

    /// A trigger fired while another request was in flight
    RequestRejected { action: Action },

    /// A request cycle ended, successfully or not
    RequestFinished {
        action: Action,
        token: RequestToken,
        success: bool,
    },

    /// The error banner now shows this message
    ErrorShown { message: String },

    /// The results panel became visible
    ResultsShown,

    /// Active tab switched
    TabActivated {
        old_tab: Option<TabId>,
        new_tab: TabId,
    },

    /// A tab content region received new content
    RegionUpdated { tab: TabId },

    /// Transient status bar message
    StatusMessageSet { message: String },

    /// Current results were written to an HTML file
    ExportWritten { path: String },

    /// User asked to leave
    QuitRequested,
}
