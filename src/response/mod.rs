//! Response handling.
//!
//! - [`ResponseEnvelope`]: outcome of one request, resolved in two stages
//! - [`GeoRecord`] and its sub-records: the decoded lookup result

mod envelope;
mod types;

// Re-export public API
pub use envelope::ResponseEnvelope;
pub(crate) use types::OneOrMany;
pub use types::{Connection, Currency, GeoRecord, Language, Location, Security, TimeZone};
