//! ipstack_client: IP geolocation lookups through the ipstack API
//!
//! This library resolves single, batch and self lookups against
//! [ipstack](https://ipstack.com), returning decoded [`GeoRecord`]s or a
//! typed [`LookupError`].
//!
//! # Example
//!
//! ```no_run
//! use ipstack_client::{fields, ClientBuilder, ConfigureRequest, GeoRecord};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::new()
//!     .token("my-access-key")
//!     .build()
//!     .await?;
//!
//! let record = client.ip("134.201.250.155").await?;
//! println!("{:?} {:?}", record.country_name, record.city);
//!
//! // Per-call options never leak into the client's baseline.
//! let record: GeoRecord = client
//!     .request()
//!     .with_fields([fields::LOCATION])
//!     .ip("8.8.8.8")
//!     .await
//!     .check_error()
//!     .decode()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and require a Tokio runtime.

pub mod config;
mod client;
mod error_handling;
pub mod fields;
pub mod initialization;
mod request;
mod response;
pub mod transport;

#[cfg(test)]
mod test_helpers;

// Re-export public API
pub use client::default::{ip, ips, me, request};
pub use client::{default_client, init, Client, ClientBuilder};
pub use config::{ClientConfig, ClientOption, ClientParam};
pub use error_handling::{
    api_error, ApiError, ErrorKind, InitializationError, LookupError, SelfLookupError,
};
pub use request::{ConfigureRequest, RequestTemplate, Scheme};
pub use response::{
    Connection, Currency, GeoRecord, Language, Location, ResponseEnvelope, Security, TimeZone,
};
pub use transport::{ReqwestTransport, Transport, TransportError};
