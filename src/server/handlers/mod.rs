//! Analyze endpoint handlers, one per audit domain.
//!
//! Every handler follows the same shape: validate the submitted URL, run the
//! domain analysis under the per-domain deadline, and wrap the outcome in the
//! success or error envelope.

mod accessibility;
mod performance;
mod security;
mod seo;

use url::Url;

use crate::app::validate_and_normalize_url;
use crate::error_handling::AuditError;

use super::types::AnalyzeRequest;

pub use accessibility::accessibility_handler;
pub use performance::performance_handler;
pub use security::security_handler;
pub use seo::seo_handler;

/// Extracts and normalizes the audit target from a request body.
fn parse_target(request: &AnalyzeRequest) -> Result<Url, AuditError> {
    let raw = request
        .url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .ok_or(AuditError::UrlRequired)?;
    validate_and_normalize_url(raw)
}
