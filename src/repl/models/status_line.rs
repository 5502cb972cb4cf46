//! # Status Line Model
//!
//! Encapsulates all state related to the status line display,
//! providing a clean interface for status bar rendering.

use crate::repl::events::Action;
use crate::repl::models::HttpStatus;

/// Status line model containing all status bar display state
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Temporary status message to display
    status_message: Option<String>,

    /// Profile name and the backend it points at
    profile_name: String,
    base_url: String,

    /// Action currently waiting on the backend
    executing: Option<Action>,

    /// Status and timing of the last completed exchange
    http_status: Option<HttpStatus>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            status_message: None,
            profile_name: "default".to_string(),
            base_url: String::new(),
            executing: None,
            http_status: None,
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_profile_info(&mut self, profile_name: String, base_url: String) {
        self.profile_name = profile_name;
        self.base_url = base_url;
    }

    pub fn executing(&self) -> Option<Action> {
        self.executing
    }

    pub fn set_executing(&mut self, action: Option<Action>) {
        self.executing = action;
    }

    pub fn http_status(&self) -> Option<HttpStatus> {
        self.http_status
    }

    pub fn set_http_status(&mut self, status: HttpStatus) {
        self.http_status = Some(status);
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_should_track_profile_and_message() {
        let mut status = StatusLine::new();
        status.set_profile_info("staging".to_string(), "http://api".to_string());
        status.set_status_message("hello");

        assert_eq!(status.profile_name(), "staging");
        assert_eq!(status.base_url(), "http://api");
        assert_eq!(status.status_message(), Some("hello"));

        status.clear_status_message();
        assert_eq!(status.status_message(), None);
    }

    #[test]
    fn status_line_should_remember_last_http_status() {
        let mut status = StatusLine::new();
        assert!(status.http_status().is_none());

        status.set_http_status(HttpStatus {
            status_code: 200,
            duration_ms: 12,
        });
        assert_eq!(status.http_status().unwrap().status_code, 200);
    }
}
