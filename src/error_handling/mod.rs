//! Error types and the audit failure taxonomy.
//!
//! Three kinds of failure exist in this service:
//! - Input errors (missing or malformed URL) are rejected before any network
//!   traffic and surface as 400 responses.
//! - Upstream fetch errors are caught inside the extractor that performed the
//!   fetch and converted to a pessimistic default record; scoring proceeds on
//!   degraded data. The one exception is the SEO top-level page fetch, which
//!   fails the SEO domain outright.
//! - Unexpected internal errors are caught at the handler boundary, logged,
//!   and surface as 500 responses.
//!
//! No retries anywhere: a failed fetch degrades immediately.

mod types;

pub use types::{AuditError, FetchError};
