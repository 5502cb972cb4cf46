//! # Application Control Commands
//!
//! Help, export and quit.

use anyhow::Result;
use std::path::Path;

use super::{Command, CommandInput, ExecutionContext};
use crate::repl::events::ModelEvent;
use crate::repl::views::export_html;

/// One-line summary of every command, shown by `help`
pub const HELP_TEXT: &str = "category <text> | platform <text> | keywords | report | tab <seed|competitor|questions|report> | export <file.html> | quit";

/// `help`: list commands in the status bar
pub struct HelpCommand;

impl Command for HelpCommand {
    fn is_relevant(&self, input: &CommandInput) -> bool {
        matches!(input.name(), "help" | "h" | "?")
    }

    fn handle(
        &self,
        _input: &CommandInput,
        context: &mut ExecutionContext,
    ) -> Result<Vec<ModelEvent>> {
        Ok(vec![context.view_model.set_status_message(HELP_TEXT)])
    }

    fn name(&self) -> &'static str {
        "Help"
    }
}

/// `export <path>`: write the results page as HTML
pub struct ExportCommand;

impl Command for ExportCommand {
    fn is_relevant(&self, input: &CommandInput) -> bool {
        input.name() == "export"
    }

    fn handle(
        &self,
        input: &CommandInput,
        context: &mut ExecutionContext,
    ) -> Result<Vec<ModelEvent>> {
        if input.argument().is_empty() {
            return Err(anyhow::anyhow!("Usage: export <file.html>"));
        }

        let path = shellexpand::tilde(input.argument()).to_string();
        export_html(context.view_model, Path::new(&path))?;

        Ok(vec![
            context
                .view_model
                .set_status_message(format!("Exported to {path}")),
            ModelEvent::ExportWritten { path },
        ])
    }

    fn name(&self) -> &'static str {
        "Export"
    }
}

/// `quit` / `q`: leave the application
pub struct QuitCommand;

impl Command for QuitCommand {
    fn is_relevant(&self, input: &CommandInput) -> bool {
        matches!(input.name(), "quit" | "q" | "exit")
    }

    fn handle(
        &self,
        _input: &CommandInput,
        _context: &mut ExecutionContext,
    ) -> Result<Vec<ModelEvent>> {
        Ok(vec![ModelEvent::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "Quit"
    }
}
