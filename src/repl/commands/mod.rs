//! # Command Pattern Infrastructure
//!
//! Each command decides whether an input line is meant for it (`is_relevant`)
//! and carries the logic for it (`handle`), returning semantic ModelEvents.
//!
//! Input lines look like `category running shoes`, `keywords` or `:tab report`;
//! a leading `:` is optional.

pub mod app;
pub mod form;
pub mod registry;
pub mod request;
pub mod tab;

pub use app::{ExportCommand, HelpCommand, QuitCommand};
pub use form::SetFieldCommand;
pub use registry::CommandRegistry;
pub use request::GenerateCommand;
pub use tab::SwitchTabCommand;

use crate::repl::events::ModelEvent;
use crate::repl::services::Services;
use crate::repl::view_models::ViewModel;
use anyhow::Result;

/// A parsed input line: command word plus the rest of the line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInput {
    name: String,
    argument: String,
}

impl CommandInput {
    /// Split a line into command word and argument; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let line = line.strip_prefix(':').unwrap_or(line).trim_start();
        if line.is_empty() {
            return None;
        }

        let (name, argument) = match line.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (line, ""),
        };

        Some(Self {
            name: name.to_ascii_lowercase(),
            argument: argument.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument(&self) -> &str {
        &self.argument
    }
}

/// Mutable state a command may touch
pub struct ExecutionContext<'a> {
    pub view_model: &'a mut ViewModel,
    pub services: &'a mut Services,
}

/// A single input command
pub trait Command: Send + Sync {
    /// Whether this command handles the given input
    fn is_relevant(&self, input: &CommandInput) -> bool;

    /// Execute the command
    fn handle(
        &self,
        input: &CommandInput,
        context: &mut ExecutionContext,
    ) -> Result<Vec<ModelEvent>>;

    /// Name for logging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::Profile;
    use crate::repl::services::Services;

    /// Services pointed at an address nothing listens on
    pub fn offline_services() -> Services {
        let mut profile = Profile::blank("test");
        profile.base_url = "http://127.0.0.1:9".to_string();
        Services::new(&profile).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_should_split_name_and_argument() {
        let input = CommandInput::parse("  Category   running shoes ").unwrap();
        assert_eq!(input.name(), "category");
        assert_eq!(input.argument(), "running shoes");
    }

    #[test]
    fn parse_should_accept_colon_prefix() {
        let input = CommandInput::parse(":tab report").unwrap();
        assert_eq!(input.name(), "tab");
        assert_eq!(input.argument(), "report");
    }

    #[test]
    fn parse_should_ignore_blank_lines() {
        assert_eq!(CommandInput::parse("   "), None);
        assert_eq!(CommandInput::parse(":"), None);
    }

    #[test]
    fn parse_should_allow_missing_argument() {
        let input = CommandInput::parse("keywords").unwrap();
        assert_eq!(input.argument(), "");
    }
}
