//! # Models
//!
//! Pure data: form inputs, request/response payloads, tabs and status line.

pub mod form_model;
pub mod request_model;
pub mod response_model;
pub mod status_line;
pub mod tab_model;

pub use form_model::FormModel;
pub use request_model::{KeywordRequest, RequestOptions, DEFAULT_PLATFORM};
pub use response_model::{HttpStatus, KeywordResult, ReportResult};
pub use status_line::StatusLine;
pub use tab_model::{RegionContent, Tab, TabModel, DEFAULT_TABS};
