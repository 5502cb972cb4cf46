//! # Tab Model
//!
//! Tab buttons and their content regions. Each tab owns one region keyed by
//! the same identifier; exactly one region is visible once a tab is active.

use crate::repl::events::{ModelEvent, TabId};
use anyhow::Result;

/// Tabs of the results panel as (id, label); the first one starts active
pub const DEFAULT_TABS: [(&str, &str); 4] = [
    (TabId::SEED, "Seed Keywords"),
    (TabId::COMPETITOR, "Competitor Gaps"),
    (TabId::QUESTIONS, "Questions"),
    (TabId::REPORT, "Report"),
];

/// What a content region currently holds
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RegionContent {
    #[default]
    Empty,
    /// Highlighted JSON markup (`<span class="json-…">`)
    Highlighted(String),
    /// Raw text, shown without interpretation
    Plain(String),
}

impl RegionContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, RegionContent::Empty)
    }
}

/// A tab button plus its content region
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    id: TabId,
    label: String,
    content: RegionContent,
    content_visible: bool,
    button_active: bool,
}

impl Tab {
    fn new(id: TabId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            content: RegionContent::Empty,
            content_visible: false,
            button_active: false,
        }
    }

    pub fn id(&self) -> &TabId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn content(&self) -> &RegionContent {
        &self.content
    }

    pub fn is_content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn is_button_active(&self) -> bool {
        self.button_active
    }
}

/// Tab state machine: one state per tab, any tab reachable from any other
#[derive(Debug, Clone, PartialEq)]
pub struct TabModel {
    tabs: Vec<Tab>,
}

impl TabModel {
    /// Build tabs from a layout, marking `initial` active if it names a tab
    pub fn from_layout(layout: &[(&str, &str)], initial: Option<&str>) -> Self {
        let tabs = layout
            .iter()
            .map(|(id, label)| {
                let mut tab = Tab::new(TabId::new(*id), *label);
                if initial == Some(*id) {
                    tab.content_visible = true;
                    tab.button_active = true;
                }
                tab
            })
            .collect();
        Self { tabs }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn get(&self, id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| &tab.id == id)
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.get(id).is_some()
    }

    /// Tab whose button is marked active
    pub fn active(&self) -> Option<&TabId> {
        self.tabs
            .iter()
            .find(|tab| tab.button_active)
            .map(|tab| &tab.id)
    }

    pub fn content(&self, id: &TabId) -> Option<&RegionContent> {
        self.get(id).map(|tab| &tab.content)
    }

    pub fn visible_region_count(&self) -> usize {
        self.tabs.iter().filter(|tab| tab.content_visible).count()
    }

    pub fn active_button_count(&self) -> usize {
        self.tabs.iter().filter(|tab| tab.button_active).count()
    }

    /// Hide every region, deactivate every button, then show the selected one
    ///
    /// Unknown ids are rejected before anything is hidden.
    pub fn activate(&mut self, id: &TabId) -> Result<ModelEvent> {
        if !self.contains(id) {
            return Err(anyhow::anyhow!("Unknown tab: {id}"));
        }

        let old_tab = self.active().cloned();

        for tab in &mut self.tabs {
            tab.content_visible = false;
            tab.button_active = false;
        }

        for tab in self.tabs.iter_mut().filter(|tab| &tab.id == id) {
            tab.content_visible = true;
            tab.button_active = true;
        }

        Ok(ModelEvent::TabActivated {
            old_tab,
            new_tab: id.clone(),
        })
    }

    /// Replace the content of a tab's region
    pub fn set_content(&mut self, id: &TabId, content: RegionContent) -> Result<ModelEvent> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|tab| &tab.id == id)
            .ok_or_else(|| anyhow::anyhow!("Unknown content region: {id}"))?;
        tab.content = content;
        Ok(ModelEvent::RegionUpdated { tab: id.clone() })
    }
}

impl Default for TabModel {
    fn default() -> Self {
        Self::from_layout(&DEFAULT_TABS, Some(TabId::SEED))
    }
}
