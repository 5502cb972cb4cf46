//! Response models for the keyword backend
//!
//! The payloads are opaque to this client: every keyword field is kept as a
//! raw JSON value and rendered verbatim.

use serde::Deserialize;
use serde_json::Value;

/// Body of a `/generate-keywords` response
///
/// All three keys must be present; a `null` value is accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeywordResult {
    pub seed_keywords: Value,
    pub competitor_gaps: Value,
    pub question_keywords: Value,
}

/// Body of a `/generate-report` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportResult {
    pub report: Value,
    pub keywords: KeywordResult,
}

impl ReportResult {
    /// Report as display text; non-string values are shown in their JSON form
    pub fn report_text(&self) -> String {
        match &self.report {
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Timing and status of the last completed HTTP exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatus {
    pub status_code: u16,
    pub duration_ms: u64,
}
