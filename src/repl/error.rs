//! # Request Errors
//!
//! User-visible failures of a keyword or report request. The `Display` text of
//! each variant is exactly what the error banner shows.

use thiserror::Error;

/// Message shown when a trigger fires without a category
pub const MISSING_CATEGORY_MESSAGE: &str = "Please enter a category";

/// Failure of a single request cycle
#[derive(Debug, Error)]
pub enum RequestError {
    /// Category field was blank; no request was sent
    #[error("Please enter a category")]
    MissingCategory,

    /// Backend answered with a non-2xx status
    #[error("API Error: {status}")]
    Status { status: u16 },

    /// Request could not be sent or the response could not be read
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not JSON, or not the shape the renderer expects
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Another request is still in flight
    #[error("A request is already in progress")]
    Busy,
}

impl RequestError {
    /// Whether the error belongs in the error banner (as opposed to the status bar)
    pub fn is_banner_error(&self) -> bool {
        !matches!(self, RequestError::Busy)
    }
}
