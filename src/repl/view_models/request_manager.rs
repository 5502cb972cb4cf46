//! # Request Lifecycle
//!
//! Loading, error and results panels around one request cycle, plus the
//! in-flight guard that rejects overlapping triggers.

use crate::repl::error::RequestError;
use crate::repl::events::{Action, ModelEvent, RequestToken, ViewEvent};
use crate::repl::models::KeywordRequest;
use crate::repl::services::HttpResponseMessage;
use crate::repl::view_models::core::{InFlight, ViewModel};

/// A validated request ready to hand to the HTTP service
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub token: RequestToken,
    pub action: Action,
    pub request: KeywordRequest,
}

impl ViewModel {
    /// Validate the form and enter the loading state
    ///
    /// On validation failure the error banner shows the message and nothing
    /// else changes. While a request is in flight every trigger is rejected.
    pub fn begin_request(&mut self, action: Action) -> Result<PendingRequest, RequestError> {
        if let Some(in_flight) = self.in_flight {
            tracing::warn!(
                "Rejecting {} while {} request {} is in flight",
                action,
                in_flight.action,
                in_flight.token.id()
            );
            self.set_status_message(RequestError::Busy.to_string());
            return Err(RequestError::Busy);
        }

        let request = match KeywordRequest::from_form(&self.form, &self.request_options, action)
        {
            Ok(request) => request,
            Err(error) => {
                tracing::debug!("Validation failed for {}: {}", action, error);
                self.show_error(error.to_string());
                return Err(error);
            }
        };

        self.show_loading();
        self.hide_error();

        let token = self.last_token.next();
        self.last_token = token;
        self.in_flight = Some(InFlight { token, action });
        self.status_line.set_executing(Some(action));
        self.status_line.clear_status_message();
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);

        tracing::info!("Request {} started: {}", token.id(), action);
        Ok(PendingRequest {
            token,
            action,
            request,
        })
    }

    /// Token of the request currently in flight
    pub fn in_flight_token(&self) -> Option<RequestToken> {
        self.in_flight.map(|in_flight| in_flight.token)
    }

    /// Apply a backend response to the display
    ///
    /// Responses for any token other than the in-flight one are dropped.
    pub fn complete_request(&mut self, message: HttpResponseMessage) -> Vec<ModelEvent> {
        let token = message.token();
        let Some(in_flight) = self.in_flight.filter(|in_flight| in_flight.token == token) else {
            tracing::debug!("Dropping stale response for request {}", token.id());
            return Vec::new();
        };

        let mut events = Vec::new();
        let success = match message {
            HttpResponseMessage::Success { status, body, .. } => {
                self.status_line.set_http_status(status);
                match self.render_response(in_flight.action, &body) {
                    Ok(render_events) => {
                        events.extend(render_events);
                        events.push(self.show_results());
                        true
                    }
                    Err(error) => {
                        tracing::error!("Failed to render {} response: {}", in_flight.action, error);
                        events.push(self.show_error(error.to_string()));
                        false
                    }
                }
            }
            HttpResponseMessage::Error {
                status, message, ..
            } => {
                if let Some(status) = status {
                    self.status_line.set_http_status(status);
                }
                events.push(self.show_error(message));
                false
            }
        };

        self.hide_loading();
        self.in_flight = None;
        self.status_line.set_executing(None);
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);

        tracing::info!(
            "Request {} finished: {} (success={})",
            token.id(),
            in_flight.action,
            success
        );
        events.push(ModelEvent::RequestFinished {
            action: in_flight.action,
            token,
            success,
        });
        events
    }

    /// Show the error banner with the given text
    pub fn show_error(&mut self, message: impl Into<String>) -> ModelEvent {
        let message = message.into();
        self.error_message = Some(message.clone());
        self.emit_view_event(ViewEvent::FullRedrawRequired);
        ModelEvent::ErrorShown { message }
    }

    pub fn hide_error(&mut self) {
        if self.error_message.take().is_some() {
            self.emit_view_event(ViewEvent::FullRedrawRequired);
        }
    }

    fn show_loading(&mut self) {
        self.loading = true;
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    fn hide_loading(&mut self) {
        self.loading = false;
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    fn show_results(&mut self) -> ModelEvent {
        self.results_visible = true;
        self.emit_view_event(ViewEvent::FullRedrawRequired);
        ModelEvent::ResultsShown
    }
}
