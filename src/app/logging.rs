//! Logging Initialization
//!
//! Configures tracing-subscriber for structured logging. Output goes to
//! stderr so it never corrupts the alternate-screen UI on stdout.

use crate::app::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{
    fmt::{self, time::SystemTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Initialize the logging system based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => init_json_logging(config, env_filter)?,
        "pretty" => init_pretty_logging(config, env_filter)?,
        _ => init_compact_logging(config, env_filter)?,
    }

    tracing::info!(
        target: "deckhand::init",
        level = %config.level,
        format = %config.format,
        "Logging initialized"
    );

    Ok(())
}

fn init_pretty_logging(config: &LoggingConfig, env_filter: EnvFilter) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_file(config.file_line)
        .with_line_number(config.file_line)
        .with_ansi(true);

    let fmt_layer = if config.timestamps {
        fmt_layer.with_timer(SystemTime::default()).boxed()
    } else {
        fmt_layer.without_time().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

fn init_compact_logging(config: &LoggingConfig, env_filter: EnvFilter) -> Result<()> {
    let fmt_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_file(config.file_line)
        .with_line_number(config.file_line)
        .with_ansi(true);

    let fmt_layer = if config.timestamps {
        fmt_layer.with_timer(SystemTime::default()).boxed()
    } else {
        fmt_layer.without_time().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

fn init_json_logging(config: &LoggingConfig, env_filter: EnvFilter) -> Result<()> {
    let fmt_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_file(config.file_line)
        .with_line_number(config.file_line)
        .with_current_span(true);

    let fmt_layer = if config.timestamps {
        fmt_layer.with_timer(SystemTime::default()).boxed()
    } else {
        fmt_layer.without_time().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
