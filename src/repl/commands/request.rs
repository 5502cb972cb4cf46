//! # HTTP Request Commands
//!
//! `keywords` and `report`: validate the form, enter the loading state and
//! hand the request to the HTTP service.

use anyhow::Result;

use super::{Command, CommandInput, ExecutionContext};
use crate::repl::events::{Action, ModelEvent};

/// Start a keyword or report request
pub struct GenerateCommand {
    action: Action,
}

impl GenerateCommand {
    pub fn new(action: Action) -> Self {
        Self { action }
    }
}

impl Command for GenerateCommand {
    fn is_relevant(&self, input: &CommandInput) -> bool {
        input.name() == self.action.label() || input.name() == &self.action.path()[1..]
    }

    fn handle(
        &self,
        _input: &CommandInput,
        context: &mut ExecutionContext,
    ) -> Result<Vec<ModelEvent>> {
        match context.view_model.begin_request(self.action) {
            Ok(pending) => {
                context
                    .services
                    .http
                    .execute_async(pending.token, pending.action, pending.request);
                Ok(vec![ModelEvent::RequestStarted {
                    action: pending.action,
                    token: pending.token,
                }])
            }
            Err(error) if !error.is_banner_error() => Ok(vec![ModelEvent::RequestRejected {
                action: self.action,
            }]),
            // Already on the error banner
            Err(error) => Ok(vec![ModelEvent::ErrorShown {
                message: error.to_string(),
            }]),
        }
    }

    fn name(&self) -> &'static str {
        match self.action {
            Action::GenerateKeywords => "GenerateKeywords",
            Action::GenerateReport => "GenerateReport",
        }
    }
}
