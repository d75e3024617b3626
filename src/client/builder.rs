//! Client construction.

use std::sync::Arc;

use log::{info, warn};

use crate::client::{default, Client};
use crate::config::{ClientConfig, ClientOption, ClientParam};
use crate::error_handling::LookupError;
use crate::transport::Transport;

/// Builder for a [`Client`].
///
/// Named methods and raw [`ClientParam`]s feed the same parameter list and
/// are resolved together by [`ClientConfig::from_params`].
///
/// ```no_run
/// # async fn example() -> Result<(), ipstack_client::LookupError> {
/// use ipstack_client::{fields, ClientBuilder};
///
/// let client = ClientBuilder::new()
///     .token("my-access-key")
///     .fields([fields::IP, fields::COUNTRY_CODE])
///     .build()
///     .await?;
/// let record = client.ip("134.201.250.155").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    params: Vec<ClientParam>,
}

impl ClientBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access key. A blank key is ignored.
    pub fn token(self, token: impl Into<String>) -> Self {
        self.option(ClientOption::Token(token.into()))
    }

    /// Sets the transport used for every request.
    pub fn transport(self, transport: Arc<dyn Transport>) -> Self {
        self.option(ClientOption::Transport(transport))
    }

    /// Selects the HTTPS endpoint (paid plans only).
    pub fn https(self, is: bool) -> Self {
        self.option(ClientOption::UseHttps(is))
    }

    /// Requests the security module on every lookup (paid plans only).
    pub fn security(self, enabled: bool) -> Self {
        if enabled {
            self.option(ClientOption::EnableSecurity)
        } else {
            self
        }
    }

    /// Adds field selectors requested by every lookup.
    pub fn fields<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            self
        } else {
            self.option(ClientOption::Fields(fields))
        }
    }

    /// Overrides the API host (`host[:port]`).
    pub fn host(self, host: impl Into<String>) -> Self {
        self.option(ClientOption::Host(host.into()))
    }

    /// Timeout of the default transport, in seconds.
    pub fn timeout_seconds(self, secs: u64) -> Self {
        self.option(ClientOption::TimeoutSeconds(secs))
    }

    /// User-Agent of the default transport.
    pub fn user_agent(self, user_agent: impl Into<String>) -> Self {
        self.option(ClientOption::UserAgent(user_agent.into()))
    }

    /// Skips the self lookup performed by [`ClientBuilder::build`].
    pub fn skip_self_check(self) -> Self {
        self.option(ClientOption::SkipSelfCheck)
    }

    /// Appends one raw parameter (credential, transport or option).
    pub fn param(mut self, param: impl Into<ClientParam>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Appends raw parameters in order.
    pub fn params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ClientParam>,
    {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Resolves the collected parameters without building a client.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Configuration`] if no access key was given or
    /// the default transport cannot be created.
    pub fn into_config(self) -> Result<ClientConfig, LookupError> {
        ClientConfig::from_params(self.params)
    }

    /// Builds the client.
    ///
    /// Unless [`ClientBuilder::skip_self_check`] was called, a self lookup is
    /// made first and its record cached. The client becomes the process-wide
    /// default if none is registered yet (see [`crate::init`]).
    ///
    /// # Errors
    ///
    /// Returns the configuration error, or the error of the self lookup.
    pub async fn build(self) -> Result<Arc<Client>, LookupError> {
        let client = Arc::new(self.build_unregistered().await?);
        default::register_if_absent(&client);
        Ok(client)
    }

    pub(crate) async fn build_unregistered(self) -> Result<Client, LookupError> {
        let config = self.into_config()?;
        let client = Client::from_config(&config);
        if config.skip_self_check {
            return Ok(client);
        }
        match client.me(false).await {
            Ok(record) => {
                info!(
                    "ipstack client ready (self IP: {})",
                    record.ip.as_deref().unwrap_or("unknown")
                );
                Ok(client)
            }
            Err(e) => {
                warn!("ipstack client self check failed: {}", e.error());
                Err(e.into())
            }
        }
    }

    fn option(self, option: ClientOption) -> Self {
        self.param(option)
    }
}
