//! Client state: the baseline template and the cached self record.

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::Mutex;

use crate::config::ClientConfig;
use crate::error_handling::{LookupError, SelfLookupError};
use crate::request::RequestTemplate;
use crate::response::{GeoRecord, OneOrMany};

/// An ipstack API client.
///
/// Owns the baseline [`RequestTemplate`] every lookup starts from and the
/// record of the last successful self lookup. Share it behind an `Arc`; all
/// methods take `&self`.
#[derive(Debug)]
pub struct Client {
    base: RequestTemplate,
    me: Mutex<Option<Arc<GeoRecord>>>,
}

impl Client {
    /// Creates a client from a resolved configuration without any network
    /// call. Use [`crate::ClientBuilder`] for the usual construction path.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base: RequestTemplate::from_config(config),
            me: Mutex::new(None),
        }
    }

    /// Returns a copy of the baseline template for a customized lookup.
    ///
    /// Configuring the copy never affects the client or other copies.
    pub fn request(&self) -> RequestTemplate {
        self.base.clone()
    }

    /// Looks up a single IPv4 or IPv6 address.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Validation`] for a blank or malformed address
    /// (no request is made), or the transport, decode or remote error of the
    /// request.
    pub async fn ip(&self, ip: &str) -> Result<GeoRecord, LookupError> {
        self.base.ip(ip).await.check_error().decode()
    }

    /// Looks up several addresses in one request (paid plans only).
    ///
    /// Invalid entries are dropped before sending. When a single address is
    /// left, the result is a one-element list.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Validation`] when the list is empty or holds no
    /// valid address, or the transport, decode or remote error of the request.
    pub async fn ips<I, S>(&self, ips: I) -> Result<Vec<GeoRecord>, LookupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let body: OneOrMany = self.base.ips(ips).await.check_error().decode()?;
        Ok(body.into())
    }

    /// Looks up the caller's own address.
    ///
    /// The last successful result is cached; it is returned without a request
    /// unless `force_refresh` is set. Concurrent calls are serialized, so a
    /// cold cache is filled by one request at a time.
    ///
    /// # Errors
    ///
    /// Returns a [`SelfLookupError`] holding the failure and the record that
    /// was cached before the call, which is left in place.
    pub async fn me(&self, force_refresh: bool) -> Result<Arc<GeoRecord>, SelfLookupError> {
        let mut slot = self.me.lock().await;
        if !force_refresh {
            if let Some(record) = slot.as_ref() {
                debug!("Returning cached self record");
                return Ok(Arc::clone(record));
            }
        }

        let record: GeoRecord = match self.base.me().await.check_error().decode() {
            Ok(record) => record,
            Err(error) => {
                warn!("Self lookup failed: {error}");
                return Err(SelfLookupError::new(error, slot.clone()));
            }
        };

        // Reuse the cached allocation when no caller holds the old record.
        let record = match slot.take() {
            Some(mut cached) => match Arc::get_mut(&mut cached) {
                Some(inner) => {
                    *inner = record;
                    cached
                }
                None => Arc::new(record),
            },
            None => Arc::new(record),
        };
        *slot = Some(Arc::clone(&record));
        Ok(record)
    }

    /// The cached self record, without any request.
    pub async fn cached_me(&self) -> Option<Arc<GeoRecord>> {
        self.me.lock().await.clone()
    }
}
