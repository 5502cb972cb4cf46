//! # Services Layer
//!
//! Provides business logic services that are used by Commands.
//! Services encapsulate operations on external resources and keep
//! them out of the ViewModel.

pub mod http;

pub use http::{HttpResponseMessage, KeywordService};

use crate::config::Profile;
use anyhow::Result;

/// Aggregates all services for convenient access
pub struct Services {
    /// Service for backend requests
    pub http: KeywordService,
}

impl Services {
    /// Create services configured from a profile
    pub fn new(profile: &Profile) -> Result<Self> {
        Ok(Self {
            http: KeywordService::new(profile)?,
        })
    }
}
