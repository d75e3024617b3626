//! Client state and construction.
//!
//! This module provides:
//! - [`Client`]: the baseline request template plus the cached self record
//! - [`ClientBuilder`]: construction, with an optional self check
//! - The process-wide default client and its delegating lookups

mod builder;
pub(crate) mod default;
mod state;

pub use builder::ClientBuilder;
pub use default::{default_client, init};
pub use state::Client;
