//! # Tab Commands

use anyhow::Result;

use super::{Command, CommandInput, ExecutionContext};
use crate::repl::events::{ModelEvent, TabId};

/// `tab <id>`: switch the visible results tab
pub struct SwitchTabCommand;

impl Command for SwitchTabCommand {
    fn is_relevant(&self, input: &CommandInput) -> bool {
        input.name() == "tab"
    }

    fn handle(
        &self,
        input: &CommandInput,
        context: &mut ExecutionContext,
    ) -> Result<Vec<ModelEvent>> {
        if input.argument().is_empty() {
            return Err(anyhow::anyhow!("Usage: tab <seed|competitor|questions|report>"));
        }
        let tab = TabId::new(input.argument().to_ascii_lowercase());
        Ok(vec![context.view_model.show_tab(&tab)?])
    }

    fn name(&self) -> &'static str {
        "SwitchTab"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::commands::test_support::offline_services;
    use crate::repl::view_models::ViewModel;

    #[tokio::test]
    async fn tab_command_should_switch_active_tab() {
        let mut view_model = ViewModel::new();
        let mut services = offline_services();
        let mut context = ExecutionContext {
            view_model: &mut view_model,
            services: &mut services,
        };

        SwitchTabCommand
            .handle(&CommandInput::parse("tab Questions").unwrap(), &mut context)
            .unwrap();

        assert_eq!(view_model.active_tab(), Some(&TabId::questions()));
    }

    #[tokio::test]
    async fn tab_command_should_reject_unknown_tab() {
        let mut view_model = ViewModel::new();
        let mut services = offline_services();
        let mut context = ExecutionContext {
            view_model: &mut view_model,
            services: &mut services,
        };

        let result = SwitchTabCommand.handle(&CommandInput::parse("tab trends").unwrap(), &mut context);

        assert!(result.is_err());
        assert_eq!(view_model.active_tab(), Some(&TabId::seed()));
    }
}
