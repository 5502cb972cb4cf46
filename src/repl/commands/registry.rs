//! # Command Registry
//!
//! Holds every command and routes an input line to the first one that
//! declares itself relevant.

use anyhow::Result;
use std::sync::Arc;

use super::{
    Command, CommandInput, ExecutionContext, ExportCommand, GenerateCommand, HelpCommand,
    QuitCommand, SetFieldCommand, SwitchTabCommand,
};
use crate::repl::events::{Action, FormField, ModelEvent};

// Type alias for complex Command type
type CommandArc = Arc<dyn Command>;

/// Registry that processes input lines through Commands
pub struct CommandRegistry {
    commands: Vec<CommandArc>,
}

impl CommandRegistry {
    /// Create a new registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        self.add_command(Arc::new(SetFieldCommand::new(FormField::Category)));
        self.add_command(Arc::new(SetFieldCommand::new(FormField::Platform)));
        self.add_command(Arc::new(GenerateCommand::new(Action::GenerateKeywords)));
        self.add_command(Arc::new(GenerateCommand::new(Action::GenerateReport)));
        self.add_command(Arc::new(SwitchTabCommand));
        self.add_command(Arc::new(ExportCommand));
        self.add_command(Arc::new(HelpCommand));
        self.add_command(Arc::new(QuitCommand));
    }

    /// Add a command to the registry
    pub fn add_command(&mut self, command: CommandArc) {
        self.commands.push(command);
    }

    /// Find the command for a parsed input
    pub fn find(&self, input: &CommandInput) -> Option<CommandArc> {
        self.commands
            .iter()
            .find(|command| command.is_relevant(input))
            .cloned()
    }

    /// Parse and execute one input line
    ///
    /// Blank lines do nothing; unknown commands are errors.
    pub fn process_line(
        &self,
        line: &str,
        context: &mut ExecutionContext,
    ) -> Result<Vec<ModelEvent>> {
        let Some(input) = CommandInput::parse(line) else {
            return Ok(Vec::new());
        };

        let command = self
            .find(&input)
            .ok_or_else(|| anyhow::anyhow!("Unknown command: {}", input.name()))?;

        tracing::debug!("Found relevant command: {} for '{}'", command.name(), line);
        command.handle(&input, context)
    }

    /// Get count of registered commands
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
