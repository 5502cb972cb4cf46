//! # Form Commands
//!
//! `category <text>` and `platform <text>`; an empty argument clears the field.

use anyhow::Result;

use super::{Command, CommandInput, ExecutionContext};
use crate::repl::events::{FormField, ModelEvent};

/// Set one form field from the rest of the line
pub struct SetFieldCommand {
    field: FormField,
}

impl SetFieldCommand {
    pub fn new(field: FormField) -> Self {
        Self { field }
    }
}

impl Command for SetFieldCommand {
    fn is_relevant(&self, input: &CommandInput) -> bool {
        input.name() == self.field.label()
    }

    fn handle(
        &self,
        input: &CommandInput,
        context: &mut ExecutionContext,
    ) -> Result<Vec<ModelEvent>> {
        Ok(vec![context
            .view_model
            .set_field(self.field, input.argument())])
    }

    fn name(&self) -> &'static str {
        match self.field {
            FormField::Category => "SetCategory",
            FormField::Platform => "SetPlatform",
        }
    }
}
