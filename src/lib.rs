//! webinspect library: website audit functionality
//!
//! This library analyzes a public website across four independent audit
//! domains -- security, performance, SEO, and accessibility -- and produces a
//! scored report per domain with typed issues and prioritized
//! recommendations. An HTTP API layer exposes one analyze endpoint per
//! domain.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use webinspect::app::validate_and_normalize_url;
//! use webinspect::fetch::Fetcher;
//! use webinspect::security::analyze_security;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = Fetcher::new()?;
//! let url = validate_and_normalize_url("example.com")?;
//! let report = analyze_security(&fetcher, &url).await;
//! println!("Security score: {}", report.score);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

pub mod accessibility;
pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod performance;
pub mod report;
pub mod security;
pub mod seo;
pub mod server;
pub mod signal;

// Re-export public API
pub use config::{Config, LogLevel};
pub use error_handling::{AuditError, FetchError};
pub use report::{Issue, Severity};
pub use server::start_server;
