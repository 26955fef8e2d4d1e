//! Application-level utilities: logging setup and URL validation.

mod logging;
mod url;

pub use logging::init_logger;
pub use url::validate_and_normalize_url;
