//! Tests for CLI argument parsing.

use clap::Parser;
use webinspect::{Config, LogLevel};

#[test]
fn defaults_match_documented_values() {
    let config = Config::parse_from(["webinspect"]);
    assert_eq!(config.bind, "127.0.0.1");
    assert_eq!(config.port, 3000);
    assert!(matches!(config.log_level, LogLevel::Info));
}

#[test]
fn bind_and_port_can_be_overridden() {
    let config = Config::parse_from(["webinspect", "--bind", "0.0.0.0", "--port", "8080"]);
    assert_eq!(config.bind, "0.0.0.0");
    assert_eq!(config.port, 8080);
}

#[test]
fn short_port_flag_works() {
    let config = Config::parse_from(["webinspect", "-p", "9000"]);
    assert_eq!(config.port, 9000);
}

#[test]
fn log_level_parses_all_variants() {
    for (flag, expected) in [
        ("error", LogLevel::Error),
        ("warn", LogLevel::Warn),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
    ] {
        let config = Config::parse_from(["webinspect", "--log-level", flag]);
        assert_eq!(
            std::mem::discriminant(&config.log_level),
            std::mem::discriminant(&expected),
            "flag {flag} parsed to unexpected level"
        );
    }
}

#[test]
fn unknown_log_level_is_rejected() {
    assert!(Config::try_parse_from(["webinspect", "--log-level", "verbose"]).is_err());
}

#[test]
fn invalid_port_is_rejected() {
    assert!(Config::try_parse_from(["webinspect", "--port", "notaport"]).is_err());
    assert!(Config::try_parse_from(["webinspect", "--port", "70000"]).is_err());
}
