//! Typed client parameters and their resolution.
//!
//! A client can be configured from an unordered list of [`ClientParam`]s.
//! Plain values (an access key as text or bytes, a transport) are picked up
//! implicitly, the last one of each kind winning. Explicit [`ClientOption`]s
//! are applied in list order and take priority over implicit values.

use std::fmt;
use std::sync::Arc;

use crate::config::constants::{DEFAULT_HOST, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::error_handling::LookupError;
use crate::transport::{ReqwestTransport, Transport};

/// An explicit, named client option.
#[derive(Clone)]
pub enum ClientOption {
    /// Access key. Ignored when blank after trimming.
    Token(String),
    /// Transport used for every request.
    Transport(Arc<dyn Transport>),
    /// `true` selects the HTTPS endpoint.
    UseHttps(bool),
    /// Field selectors requested by every lookup.
    Fields(Vec<String>),
    /// Enables the security module.
    EnableSecurity,
    /// Skips the self lookup performed while building the client.
    SkipSelfCheck,
    /// API host, e.g. `api.ipstack.com` or `127.0.0.1:8080`.
    Host(String),
    /// Timeout of the default transport, in seconds.
    TimeoutSeconds(u64),
    /// User-Agent of the default transport.
    UserAgent(String),
}

impl fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientOption::Token(_) => f.write_str("Token(<redacted>)"),
            ClientOption::Transport(_) => f.write_str("Transport(..)"),
            ClientOption::UseHttps(v) => f.debug_tuple("UseHttps").field(v).finish(),
            ClientOption::Fields(v) => f.debug_tuple("Fields").field(v).finish(),
            ClientOption::EnableSecurity => f.write_str("EnableSecurity"),
            ClientOption::SkipSelfCheck => f.write_str("SkipSelfCheck"),
            ClientOption::Host(v) => f.debug_tuple("Host").field(v).finish(),
            ClientOption::TimeoutSeconds(v) => f.debug_tuple("TimeoutSeconds").field(v).finish(),
            ClientOption::UserAgent(v) => f.debug_tuple("UserAgent").field(v).finish(),
        }
    }
}

/// One entry of a client parameter list.
///
/// Usually produced through `From`: text and bytes become a credential, a
/// transport or a `reqwest::Client` becomes the transport, and a
/// [`ClientOption`] is applied as-is.
#[derive(Clone)]
pub enum ClientParam {
    /// Implicit access key.
    Credential(String),
    /// Implicit access key given as bytes (decoded as UTF-8, lossily).
    CredentialBytes(Vec<u8>),
    /// Implicit transport.
    Transport(Arc<dyn Transport>),
    /// Explicit option.
    Configure(ClientOption),
}

impl fmt::Debug for ClientParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientParam::Credential(_) | ClientParam::CredentialBytes(_) => {
                f.write_str("Credential(<redacted>)")
            }
            ClientParam::Transport(_) => f.write_str("Transport(..)"),
            ClientParam::Configure(option) => f.debug_tuple("Configure").field(option).finish(),
        }
    }
}

impl From<&str> for ClientParam {
    fn from(value: &str) -> Self {
        ClientParam::Credential(value.to_string())
    }
}

impl From<String> for ClientParam {
    fn from(value: String) -> Self {
        ClientParam::Credential(value)
    }
}

impl From<&[u8]> for ClientParam {
    fn from(value: &[u8]) -> Self {
        ClientParam::CredentialBytes(value.to_vec())
    }
}

impl From<Vec<u8>> for ClientParam {
    fn from(value: Vec<u8>) -> Self {
        ClientParam::CredentialBytes(value)
    }
}

impl From<Arc<dyn Transport>> for ClientParam {
    fn from(value: Arc<dyn Transport>) -> Self {
        ClientParam::Transport(value)
    }
}

impl From<reqwest::Client> for ClientParam {
    fn from(value: reqwest::Client) -> Self {
        ClientParam::Transport(Arc::new(ReqwestTransport::from_client(value)))
    }
}

impl From<ClientOption> for ClientParam {
    fn from(value: ClientOption) -> Self {
        ClientParam::Configure(value)
    }
}

/// Fully resolved client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// Access key, trimmed and non-empty.
    pub token: String,
    /// Transport handle shared by every request of the client.
    pub transport: Arc<dyn Transport>,
    /// Whether the HTTPS endpoint is used.
    pub use_https: bool,
    /// API host.
    pub host: String,
    /// Field selectors requested by every lookup.
    pub fields: Vec<String>,
    /// Whether the security module is requested.
    pub security: bool,
    /// Whether building the client skips the initial self lookup.
    pub skip_self_check: bool,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("use_https", &self.use_https)
            .field("host", &self.host)
            .field("fields", &self.fields)
            .field("security", &self.security)
            .field("skip_self_check", &self.skip_self_check)
            .finish_non_exhaustive()
    }
}

/// Values collected while walking the parameter list.
#[derive(Default)]
struct Pending {
    token: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    use_https: bool,
    host: Option<String>,
    fields: Vec<String>,
    security: bool,
    skip_self_check: bool,
    timeout_seconds: Option<u64>,
    user_agent: Option<String>,
}

impl Pending {
    fn apply(&mut self, option: ClientOption) {
        match option {
            ClientOption::Token(token) => {
                let token = token.trim();
                if !token.is_empty() {
                    self.token = Some(token.to_string());
                }
            }
            ClientOption::Transport(transport) => self.transport = Some(transport),
            ClientOption::UseHttps(is) => self.use_https = is,
            ClientOption::Fields(fields) => {
                // Newest selectors go first, matching RequestTemplate::with_fields.
                let mut merged = fields;
                merged.append(&mut self.fields);
                self.fields = merged;
            }
            ClientOption::EnableSecurity => self.security = true,
            ClientOption::SkipSelfCheck => self.skip_self_check = true,
            ClientOption::Host(host) => self.host = Some(host),
            ClientOption::TimeoutSeconds(secs) => self.timeout_seconds = Some(secs),
            ClientOption::UserAgent(ua) => self.user_agent = Some(ua),
        }
    }
}

impl ClientConfig {
    /// Resolves a parameter list into a configuration.
    ///
    /// Options are applied in list order. When no option set the access key,
    /// the last implicit credential is used (trimmed); when no option set the
    /// transport, the last implicit transport is used, falling back to a
    /// [`ReqwestTransport`] built with the configured timeout and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Configuration` if no non-blank access key is
    /// found or if the default transport cannot be built.
    pub fn from_params<I>(params: I) -> Result<Self, LookupError>
    where
        I: IntoIterator<Item = ClientParam>,
    {
        let mut pending = Pending::default();
        let mut implicit_token: Option<String> = None;
        let mut implicit_transport: Option<Arc<dyn Transport>> = None;

        for param in params {
            match param {
                ClientParam::Credential(token) => implicit_token = Some(token),
                ClientParam::CredentialBytes(bytes) => {
                    implicit_token = Some(String::from_utf8_lossy(&bytes).into_owned())
                }
                ClientParam::Transport(transport) => implicit_transport = Some(transport),
                ClientParam::Configure(option) => pending.apply(option),
            }
        }

        let token = match pending.token {
            Some(token) => token,
            None => implicit_token
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .ok_or_else(|| {
                    LookupError::Configuration(
                        "access key (string or bytes) is required".to_string(),
                    )
                })?,
        };

        let transport = match pending.transport.or(implicit_transport) {
            Some(transport) => transport,
            None => {
                let transport = ReqwestTransport::new(
                    pending.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
                    pending
                        .user_agent
                        .as_deref()
                        .unwrap_or(DEFAULT_USER_AGENT),
                )
                .map_err(|e| {
                    LookupError::Configuration(format!("failed to build HTTP client: {e}"))
                })?;
                Arc::new(transport) as Arc<dyn Transport>
            }
        };

        Ok(ClientConfig {
            token,
            transport,
            use_https: pending.use_https,
            host: pending.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            fields: pending.fields,
            security: pending.security,
            skip_self_check: pending.skip_self_check,
        })
    }
}
