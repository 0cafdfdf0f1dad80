//! Client configuration.
//!
//! A [`XenditConfig`] is built once and handed to
//! [`XenditClient::new`](crate::XenditClient::new); the client never reads
//! configuration from anywhere else. [`XenditConfig::from_env`] is a
//! convenience for processes that keep the API key in the environment or a
//! `.env` file.

use std::fmt;
use std::time::Duration;

use reqwest_middleware::ClientWithMiddleware;

use crate::constants::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::error::ConfigError;

/// Configuration for [`XenditClient`](crate::XenditClient).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use xendit::XenditConfig;
///
/// let config = XenditConfig::new("xnd_development_...")
///     .with_timeout(Duration::from_secs(10))
///     .with_header("for-user-id", "5f9a...");
/// ```
#[derive(Clone)]
pub struct XenditConfig {
    /// Secret API key, sent as the Basic auth username.
    pub api_key: String,

    /// API base URL (trailing slashes are ignored).
    pub base_url: String,

    /// Per-request timeout. `None` leaves timeouts to the HTTP client.
    pub timeout: Option<Duration>,

    /// Extra headers sent with every request, before per-call headers.
    pub headers: Vec<(String, String)>,

    /// Optional pre-configured HTTP client, e.g. one carrying retry or
    /// logging middleware. If `None`, a plain reqwest client is created.
    pub http_client: Option<ClientWithMiddleware>,
}

impl XenditConfig {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a config for the production API with the given key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Some(Self::DEFAULT_TIMEOUT),
            headers: Vec::new(),
            http_client: None,
        }
    }

    /// Reads the API key from `XENDIT_API_KEY` and, if set, the base URL
    /// from `XENDIT_BASE_URL`. A `.env` file in the working directory is
    /// loaded first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no API key is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| dotenvy::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = var(API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))?;
        let mut config = Self::new(api_key);
        if let Some(base_url) = var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disables the per-request timeout.
    #[must_use]
    pub const fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a pre-configured HTTP client.
    #[must_use]
    pub fn with_http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl fmt::Debug for XenditConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XenditConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field(
                "headers",
                &self.headers.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}
