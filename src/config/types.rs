//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing.

use clap::{Parser, ValueEnum};

use crate::client::ClientBuilder;
use crate::config::constants::{
    ACCESS_KEY_ENV, DEFAULT_HOST, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

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

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options of the `ipstack` binary.
///
/// With no address the caller's own IP is looked up, with one address a
/// single lookup is made, and with several a batch lookup.
#[derive(Debug, Clone, Parser)]
#[command(name = "ipstack", version, about = "Look up IP geolocation data through ipstack")]
pub struct Opt {
    /// IPv4/IPv6 addresses to look up (none = your own address)
    pub ips: Vec<String>,

    /// ipstack access key
    #[arg(long, env = ACCESS_KEY_ENV, hide_env_values = true)]
    pub access_key: Option<String>,

    /// Use the HTTPS endpoint (paid plans only)
    #[arg(long)]
    pub https: bool,

    /// Request the security module (paid plans only)
    #[arg(long)]
    pub security: bool,

    /// Comma-separated field selectors (e.g. `ip,location.capital`)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// API host
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Opt {
    /// Translates the options into a client builder.
    ///
    /// The self check is skipped: the CLI performs exactly the lookup it was
    /// asked for.
    pub fn client_builder(&self) -> ClientBuilder {
        let mut builder = ClientBuilder::new()
            .https(self.https)
            .security(self.security)
            .fields(self.fields.iter().cloned())
            .host(self.host.clone())
            .timeout_seconds(self.timeout_seconds)
            .user_agent(self.user_agent.clone())
            .skip_self_check();
        if let Some(key) = &self.access_key {
            builder = builder.token(key.clone());
        }
        builder
    }
}
