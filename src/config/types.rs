//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_BIND_ADDRESS, DEFAULT_PORT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Server configuration, parsed from the command line.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "webinspect",
    about = "Website audit API: security, performance, SEO, and accessibility analysis"
)]
pub struct Config {
    /// Address to bind the API server to
    #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Port to bind the API server to
    #[arg(long, short, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
        }
    }
}
