//! # Keyword Request Model
//!
//! Body of a POST to the keyword backend, built from the form per trigger.

use crate::repl::error::RequestError;
use crate::repl::events::Action;
use crate::repl::models::FormModel;
use serde::Serialize;

/// Platform sent when the platform field is blank
pub const DEFAULT_PLATFORM: &str = "any";

/// Optional tuning knobs the backend understands
///
/// Unset options are left out of the request body entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub language: Option<String>,
    pub max_keywords: Option<u32>,
    pub difficulty_level: Option<String>,
    pub report_length: Option<u32>,
}

/// JSON body for `/generate-keywords` and `/generate-report`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordRequest {
    pub category: String,
    pub target_platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_keywords: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_length: Option<u32>,
}

impl KeywordRequest {
    /// Plain request with no optional fields
    pub fn new(category: impl Into<String>, target_platform: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            target_platform: target_platform.into(),
            language: None,
            max_keywords: None,
            difficulty_level: None,
            report_length: None,
        }
    }

    /// Validate the form and build the body for the given action
    pub fn from_form(
        form: &FormModel,
        options: &RequestOptions,
        action: Action,
    ) -> Result<Self, RequestError> {
        let category = form.category().trim();
        if category.is_empty() {
            return Err(RequestError::MissingCategory);
        }

        let platform = match form.platform().trim() {
            "" => DEFAULT_PLATFORM,
            platform => platform,
        };

        let mut request = Self::new(category, platform);
        request.language = options.language.clone();
        request.max_keywords = options.max_keywords;
        request.difficulty_level = options.difficulty_level.clone();
        if action == Action::GenerateReport {
            request.report_length = options.report_length;
        }

        Ok(request)
    }
}
