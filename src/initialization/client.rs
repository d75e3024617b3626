//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

/// Initializes the HTTP client used by the default transport.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header
/// - Whole-request timeout
/// - Redirect following enabled (reqwest default)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(
    timeout_seconds: u64,
    user_agent: &str,
) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .build()
}
