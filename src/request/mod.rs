//! Request templates and lookup operations.
//!
//! This module provides:
//! - [`RequestTemplate`]: the immutable description of a pending call
//! - [`ConfigureRequest`]: fluent configuration, also for absent templates
//! - Single, batch and self lookups on top of one execution unit

mod lookup;
mod template;

pub use template::{ConfigureRequest, RequestTemplate, Scheme};
