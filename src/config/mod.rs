//! Client configuration and constants.
//!
//! This module provides:
//! - Wire constants (endpoint host, fixed query fragments, limits)
//! - Typed client parameters and their resolution into a [`ClientConfig`]
//! - CLI option types and parsing

mod constants;
mod params;
mod types;

// Re-export all constants
pub use constants::*;
pub use params::{ClientConfig, ClientOption, ClientParam};
pub use types::{LogFormat, LogLevel, Opt};
