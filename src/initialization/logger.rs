//! Logger initialization for the `ipstack` binary.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes `env_logger` with the given level and format.
///
/// `RUST_LOG` is read first; `level` then applies to the whole process and to
/// this crate. HTTP stack internals stay at `info` at most.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show the outgoing request targets (access key redacted)
/// ipstack 8.8.8.8 --log-level debug
///
/// # One JSON object per line
/// ipstack 8.8.8.8 --log-level info --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for noisy in ["reqwest", "hyper", "hyper_util"] {
        builder.filter_module(noisy, level.min(LevelFilter::Info));
    }
    builder.filter_module("ipstack_client", level);
    builder.filter_module("ipstack", level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init()?;
    Ok(())
}

/// `ipstack <level> <module>: <message>`, level colored, crate prefix dropped.
fn write_plain(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let level = match record.level() {
        Level::Error => "ERROR".red().bold(),
        Level::Warn => "WARN ".yellow(),
        Level::Info => "INFO ".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".dimmed(),
    };
    writeln!(
        buf,
        "{} {} {}: {}",
        "ipstack".bold(),
        level,
        short_target(record.target()).cyan(),
        record.args()
    )
}

fn write_json(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let line = serde_json::json!({
        "time": chrono::Utc::now().to_rfc3339(),
        "level": record.level().as_str(),
        "module": short_target(record.target()),
        "message": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}

/// Strips the crate name from targets inside this crate.
fn short_target(target: &str) -> &str {
    target
        .strip_prefix("ipstack_client::")
        .unwrap_or(target)
}
