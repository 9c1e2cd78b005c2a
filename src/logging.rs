use std::fs;

use anyhow::Context;
use hostel_config::{LogFormat, LoggingConfig};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn file_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={level},hostel_client={level},reqwest=warn,hyper=warn",
            env!("CARGO_CRATE_NAME"),
            level = config.level
        ))
    })
}

/// Install the global subscriber.
///
/// The terminal is shared with interactive prompts, so the console layer only
/// shows warnings and errors. Everything at the configured level goes to a
/// daily rolling file under `config.directory`.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    fs::create_dir_all(&config.directory)
        .with_context(|| format!("Failed to create logs directory {}", config.directory))?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .compact()
        .with_filter(EnvFilter::new("warn"));

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.directory, "hostel-admin.log");

    let (compact_layer, json_layer) = match config.format {
        LogFormat::Compact => (
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .compact()
                    .with_filter(file_filter(config)),
            ),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file_appender)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(file_filter(config)),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(compact_layer)
        .with(json_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
