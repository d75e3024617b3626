//! HTTP transport abstraction.
//!
//! The client never talks to the network directly: every request goes through
//! a [`Transport`], which turns a fully built URL into the drained response
//! body. [`ReqwestTransport`] is the default implementation.

use futures::future::BoxFuture;
use futures::FutureExt;
use log::debug;
use thiserror::Error;

use crate::initialization::init_client;

/// Boxed error produced by a transport implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures that can occur while performing a GET request.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be sent or no response was received.
    #[error("HTTP request error: {0}")]
    Request(#[source] BoxError),

    /// A response arrived without a body.
    #[error("response body is missing")]
    MissingBody,

    /// The response body could not be read to the end.
    #[error("error reading response body ({0})")]
    BodyRead(#[source] BoxError),
}

/// Capability to fetch a URL and return its body.
///
/// Implementations must not inspect the HTTP status: the ipstack API reports
/// its own failures inside the body.
pub trait Transport: Send + Sync {
    /// Performs a GET request against `url` and returns the whole body.
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>, TransportError>>;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if client creation fails.
    pub fn new(timeout_seconds: u64, user_agent: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: init_client(timeout_seconds, user_agent)?,
        })
    }

    /// Wraps an existing client (connection pool, proxies, TLS settings).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>, TransportError>> {
        async move {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| TransportError::Request(Box::new(e.without_url())))?;
            debug!("Received HTTP {} from ipstack", response.status());
            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError::BodyRead(Box::new(e.without_url())))?;
            Ok(body.to_vec())
        }
        .boxed()
    }
}
