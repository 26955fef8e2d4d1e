//! Logger initialization.

use env_logger::Builder;

/// Initializes the global logger at the requested level.
///
/// Respects `RUST_LOG` when set; otherwise uses the level from the CLI.
pub fn init_logger(level: log::LevelFilter) {
    let mut builder = Builder::from_default_env();
    if std::env::var("RUST_LOG").is_err() {
        builder.filter_level(level);
    }
    builder.init();
}
