//! # Result Renderers
//!
//! Write backend payloads into the tab content regions.

use crate::repl::events::{Action, ModelEvent, TabId};
use crate::repl::models::{KeywordResult, RegionContent, ReportResult};
use crate::repl::utils::highlight_json;
use crate::repl::view_models::core::ViewModel;
use anyhow::Result;
use serde_json::Value;

impl ViewModel {
    /// Dispatch a response body to the action's renderer
    pub fn render_response(&mut self, action: Action, body: &Value) -> Result<Vec<ModelEvent>> {
        match action {
            Action::GenerateKeywords => {
                let result: KeywordResult = serde_json::from_value(body.clone())?;
                self.display_keyword_results(&result)
            }
            Action::GenerateReport => {
                let result: ReportResult = serde_json::from_value(body.clone())?;
                self.display_report_results(&result)
            }
        }
    }

    /// Fill the three keyword regions and switch to `seed`
    pub fn display_keyword_results(&mut self, result: &KeywordResult) -> Result<Vec<ModelEvent>> {
        Ok(vec![
            self.display_json(&TabId::seed(), &result.seed_keywords)?,
            self.display_json(&TabId::competitor(), &result.competitor_gaps)?,
            self.display_json(&TabId::questions(), &result.question_keywords)?,
            self.show_tab(&TabId::seed())?,
        ])
    }

    /// Fill the report region, then the keyword regions, and switch to `report`
    pub fn display_report_results(&mut self, result: &ReportResult) -> Result<Vec<ModelEvent>> {
        let mut events = vec![self
            .tabs
            .set_content(&TabId::report(), RegionContent::Plain(result.report_text()))?];
        events.extend(self.display_keyword_results(&result.keywords)?);
        events.push(self.show_tab(&TabId::report())?);
        Ok(events)
    }

    fn display_json(&mut self, tab: &TabId, value: &Value) -> Result<ModelEvent> {
        let pretty = serde_json::to_string_pretty(value)?;
        self.tabs
            .set_content(tab, RegionContent::Highlighted(highlight_json(&pretty)))
    }
}
