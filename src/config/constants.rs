//! Configuration constants.
//!
//! This module defines the wire-level constants of the ipstack API and the
//! defaults used when a client is built without explicit options.

/// Host serving the ipstack Web API.
pub const DEFAULT_HOST: &str = "api.ipstack.com";

/// Path segment that asks the API about the caller's own address.
pub const SELF_PATH: &str = "check";

/// Query fragment enabling the security module.
///
/// Appended verbatim after the encoded query string, never passed through the
/// form encoder.
pub const SECURITY_PARAM: &str = "security=1";

/// Documented maximum number of addresses per batch request.
///
/// Larger batches are still sent; the API decides whether to reject them.
pub const MAX_BATCH_IPS: usize = 50;

/// Query parameter carrying the access key.
pub const ACCESS_KEY_PARAM: &str = "access_key";
/// Query parameter carrying the comma-joined field selectors.
pub const FIELDS_PARAM: &str = "fields";
/// Query parameter selecting the response format.
pub const OUTPUT_PARAM: &str = "output";
/// The only output format this client decodes.
pub const OUTPUT_JSON: &str = "json";

/// Per-request timeout of the default transport, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent by the default transport.
pub const DEFAULT_USER_AGENT: &str = concat!("ipstack_client/", env!("CARGO_PKG_VERSION"));

/// Environment variable the CLI reads the access key from.
pub const ACCESS_KEY_ENV: &str = "IPSTACK_ACCESS_KEY";
