//! Process-wide default client.
//!
//! The first client built successfully through [`ClientBuilder::build`]
//! becomes the default; [`init`] replaces it explicitly. The free functions
//! below delegate to it.

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use crate::client::{Client, ClientBuilder};
use crate::error_handling::{LookupError, SelfLookupError};
use crate::request::RequestTemplate;
use crate::response::GeoRecord;

static DEFAULT_CLIENT: RwLock<Option<Arc<Client>>> = RwLock::new(None);

/// Builds a client and makes it the default, replacing any previous one.
///
/// The current default is left untouched if building fails.
///
/// # Errors
///
/// Returns the error of [`ClientBuilder::build`].
pub async fn init(builder: ClientBuilder) -> Result<Arc<Client>, LookupError> {
    let client = Arc::new(builder.build_unregistered().await?);
    let mut slot = DEFAULT_CLIENT
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *slot = Some(Arc::clone(&client));
    debug!("Default ipstack client replaced");
    Ok(client)
}

/// The default client, if one is registered.
pub fn default_client() -> Option<Arc<Client>> {
    DEFAULT_CLIENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub(crate) fn register_if_absent(client: &Arc<Client>) {
    let mut slot = DEFAULT_CLIENT
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    if slot.is_none() {
        *slot = Some(Arc::clone(client));
        debug!("Default ipstack client registered");
    }
}

fn require_default() -> Result<Arc<Client>, LookupError> {
    default_client().ok_or(LookupError::NotInitialized)
}

/// [`Client::ip`] on the default client.
///
/// # Errors
///
/// Returns [`LookupError::NotInitialized`] when there is no default client.
pub async fn ip(ip: &str) -> Result<GeoRecord, LookupError> {
    require_default()?.ip(ip).await
}

/// [`Client::ips`] on the default client.
///
/// # Errors
///
/// Returns [`LookupError::NotInitialized`] when there is no default client.
pub async fn ips<I, S>(ips: I) -> Result<Vec<GeoRecord>, LookupError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    require_default()?.ips(ips).await
}

/// [`Client::me`] on the default client.
///
/// # Errors
///
/// Returns [`LookupError::NotInitialized`] (with no stale record) when there
/// is no default client.
pub async fn me(force_refresh: bool) -> Result<Arc<GeoRecord>, SelfLookupError> {
    match default_client() {
        Some(client) => client.me(force_refresh).await,
        None => Err(SelfLookupError::new(LookupError::NotInitialized, None)),
    }
}

/// [`Client::request`] on the default client, `None` when there is none.
///
/// The result can be configured through [`crate::ConfigureRequest`] either
/// way.
pub fn request() -> Option<RequestTemplate> {
    default_client().map(|client| client.request())
}
