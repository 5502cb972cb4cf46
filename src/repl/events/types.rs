//! # Core Event Types
//!
//! Common types used throughout the event system: backend actions, tab
//! identifiers, form fields and request tokens.

use std::fmt;
use std::str::FromStr;

/// One of the two supported request flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GenerateKeywords,
    GenerateReport,
}

impl Action {
    /// Endpoint path appended to the profile's base URL
    pub fn path(&self) -> &'static str {
        match self {
            Action::GenerateKeywords => "/generate-keywords",
            Action::GenerateReport => "/generate-report",
        }
    }

    /// Short name used by the command line and the status bar
    pub fn label(&self) -> &'static str {
        match self {
            Action::GenerateKeywords => "keywords",
            Action::GenerateReport => "report",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keywords" | "generate-keywords" => Ok(Action::GenerateKeywords),
            "report" | "generate-report" => Ok(Action::GenerateReport),
            other => Err(anyhow::anyhow!("Unknown action: {other}")),
        }
    }
}

/// Identifier shared by a tab button and its content region
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabId(String);

impl TabId {
    pub const SEED: &'static str = "seed";
    pub const COMPETITOR: &'static str = "competitor";
    pub const QUESTIONS: &'static str = "questions";
    pub const REPORT: &'static str = "report";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn seed() -> Self {
        Self::new(Self::SEED)
    }

    pub fn competitor() -> Self {
        Self::new(Self::COMPETITOR)
    }

    pub fn questions() -> Self {
        Self::new(Self::QUESTIONS)
    }

    pub fn report() -> Self {
        Self::new(Self::REPORT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Editable input fields on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Category,
    Platform,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Category => "category",
            FormField::Platform => "platform",
        }
    }
}

/// Identifies one request cycle so late responses can be matched or dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}
