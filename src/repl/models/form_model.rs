//! # Form Model
//!
//! The two user inputs a request is built from.

use crate::repl::events::{FormField, ModelEvent};

/// Category and platform inputs, stored exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
    category: String,
    platform: String,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Category => &self.category,
            FormField::Platform => &self.platform,
        }
    }

    /// Replace a field's value, returning the change event
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> ModelEvent {
        let value = value.into();
        match field {
            FormField::Category => self.category = value.clone(),
            FormField::Platform => self.platform = value.clone(),
        }
        ModelEvent::FieldChanged { field, value }
    }
}
