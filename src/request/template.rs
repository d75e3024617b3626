//! Request template.
//!
//! A [`RequestTemplate`] describes a pending call: access key, transport,
//! endpoint scheme and host, accumulated field selectors and the security
//! flag. Every `with_*` method consumes the template and returns a new one,
//! so a template that was cloned before being configured is never affected:
//!
//! ```no_run
//! # async fn example(client: &ipstack_client::Client) {
//! use ipstack_client::fields;
//!
//! let envelope = client
//!     .request()
//!     .with_fields([fields::IP, fields::LOCATION])
//!     .with_security(true)
//!     .ip("134.201.250.155")
//!     .await;
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use url::form_urlencoded;

use crate::config::{
    ClientConfig, ACCESS_KEY_PARAM, DEFAULT_HOST, FIELDS_PARAM, OUTPUT_JSON, OUTPUT_PARAM,
    SECURITY_PARAM,
};
use crate::transport::Transport;

/// Endpoint scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// Plain HTTP, available on every plan.
    #[default]
    Http,
    /// HTTPS, paid plans only.
    Https,
}

impl Scheme {
    /// Returns `"http"` or `"https"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of a pending API call.
#[derive(Clone)]
pub struct RequestTemplate {
    token: String,
    pub(crate) transport: Arc<dyn Transport>,
    scheme: Scheme,
    host: String,
    fields: Vec<String>,
    security: bool,
}

impl fmt::Debug for RequestTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestTemplate")
            .field("token", &"<redacted>")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("fields", &self.fields)
            .field("security", &self.security)
            .finish_non_exhaustive()
    }
}

impl RequestTemplate {
    /// Creates a template for the default host over HTTP with no selectors.
    pub fn new(token: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            token: token.into(),
            transport,
            scheme: Scheme::Http,
            host: DEFAULT_HOST.to_string(),
            fields: Vec::new(),
            security: false,
        }
    }

    /// Creates the baseline template described by a resolved configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.token.clone(), Arc::clone(&config.transport))
            .with_host(config.host.clone())
            .with_https(config.use_https)
            .with_security(config.security)
            .with_fields(config.fields.iter().cloned())
    }

    /// Selects the HTTPS (`true`) or HTTP (`false`) endpoint.
    ///
    /// HTTPS requires a paid ipstack plan.
    pub fn with_https(mut self, is: bool) -> Self {
        self.scheme = if is { Scheme::Https } else { Scheme::Http };
        self
    }

    /// Enables the security module.
    ///
    /// The flag only accumulates: `false` leaves an enabled flag enabled.
    pub fn with_security(mut self, enabled: bool) -> Self {
        self.security |= enabled;
        self
    }

    /// Adds field selectors.
    ///
    /// New names are placed before the ones already accumulated. Blank names
    /// are skipped; passing none leaves the template as it was.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut merged: Vec<String> = fields
            .into_iter()
            .map(Into::into)
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        if merged.is_empty() {
            return self;
        }
        merged.append(&mut self.fields);
        self.fields = merged;
        self
    }

    /// Replaces the API host (`host[:port]`).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Endpoint scheme.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// API host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Whether the security module is requested.
    pub fn security_enabled(&self) -> bool {
        self.security
    }

    /// Comma-joined field selectors, or `None` when none were requested.
    pub fn fields_selector(&self) -> Option<String> {
        if self.fields.is_empty() {
            None
        } else {
            Some(self.fields.join(","))
        }
    }

    /// Endpoint base, e.g. `http://api.ipstack.com/`.
    pub fn endpoint(&self) -> String {
        format!("{}://{}/", self.scheme, self.host)
    }

    /// Encoded query string, starting with `?`.
    ///
    /// Keys are sorted. The security fragment is not part of it; see
    /// [`RequestTemplate::target_url`].
    pub fn query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair(ACCESS_KEY_PARAM, &self.token);
        if let Some(fields) = self.fields_selector() {
            query.append_pair(FIELDS_PARAM, &fields);
        }
        query.append_pair(OUTPUT_PARAM, OUTPUT_JSON);
        format!("?{}", query.finish())
    }

    /// Full request target for `path`.
    pub fn target_url(&self, path: &str) -> String {
        let mut url = format!("{}{}{}", self.endpoint(), path, self.query_string());
        if self.security {
            url.push('&');
            url.push_str(SECURITY_PARAM);
        }
        url
    }
}

/// Fluent configuration that also accepts an absent template.
///
/// Implemented for [`RequestTemplate`] and for `Option<RequestTemplate>`; on
/// `None` every method returns `None`, so a chain started from a missing
/// template (see [`request`](fn@crate::request)) stays missing instead of failing.
pub trait ConfigureRequest: Sized {
    /// See [`RequestTemplate::with_https`].
    fn with_https(self, is: bool) -> Self;

    /// See [`RequestTemplate::with_security`].
    fn with_security(self, enabled: bool) -> Self;

    /// See [`RequestTemplate::with_fields`].
    fn with_fields<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>;
}

impl ConfigureRequest for RequestTemplate {
    fn with_https(self, is: bool) -> Self {
        RequestTemplate::with_https(self, is)
    }

    fn with_security(self, enabled: bool) -> Self {
        RequestTemplate::with_security(self, enabled)
    }

    fn with_fields<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RequestTemplate::with_fields(self, fields)
    }
}

impl ConfigureRequest for Option<RequestTemplate> {
    fn with_https(self, is: bool) -> Self {
        self.map(|t| t.with_https(is))
    }

    fn with_security(self, enabled: bool) -> Self {
        self.map(|t| t.with_security(enabled))
    }

    fn with_fields<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.map(|t| t.with_fields(fields))
    }
}
