//! The request dispatcher shared by every Xendit resource.
//!
//! [`XenditClient`] is the single place where requests leave the process:
//! it attaches the default headers, serializes parameters, sends the
//! request, and turns the response into either the expected type or a
//! [`XenditError`].
//!
//! ## Error Handling
//!
//! - 2xx bodies are deserialized into the caller's type; keys the type does
//!   not know are ignored.
//! - Non-2xx bodies of the form `{"error_code": ..., "message": ...}` become
//!   [`XenditError::Api`].
//! - Any other non-2xx body becomes [`XenditError::HttpStatus`] carrying the
//!   raw body, and send failures become [`XenditError::Http`].
//!
//! The client performs no retries; plug retry middleware in through
//! [`XenditConfig::with_http_client`] if needed.

use std::fmt::{self, Display};
use std::time::Duration;

use base64::prelude::*;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use url::Url;
use xendit_proto::{ErrorBody, Params};

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

use crate::config::XenditConfig;
use crate::constants::{API_KEY_ENV, LIB_HEADER, LIB_NAME, LIB_VERSION, LIB_VERSION_HEADER};
use crate::error::{ApiError, ConfigError, XenditError};
use crate::invoice::Invoices;
use crate::recurring_payment::RecurringPayments;

/// Async client for the Xendit API.
///
/// Cloning is cheap and clones share the underlying connection pool. The
/// client holds no mutable state, so one instance can serve concurrent
/// calls from many tasks.
///
/// # Example
///
/// ```no_run
/// use xendit::{XenditClient, XenditConfig};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = XenditClient::new(XenditConfig::new("xnd_development_..."))?;
/// let payment = client.recurring_payments().get("5e2dd6b5a2b27bc1c5af5d2a").await?;
/// println!("{:?}", payment.status);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct XenditClient {
    /// Base URL every endpoint is resolved against.
    base_url: Url,
    /// Shared HTTP client.
    client: ClientWithMiddleware,
    /// Authentication and library headers sent with every request.
    default_headers: HeaderMap,
    /// Optional per-request timeout.
    timeout: Option<Duration>,
}

impl XenditClient {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the API key is empty, the base URL is
    /// invalid, a configured header is not valid HTTP, or the HTTP client
    /// cannot be built.
    pub fn new(config: XenditConfig) -> Result<Self, ConfigError> {
        if config.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey(API_KEY_ENV));
        }

        let base_url = parse_base_url(&config.base_url)?;
        let default_headers = default_headers(&config)?;

        let client = match config.http_client {
            Some(client) => client,
            None => reqwest_middleware::ClientBuilder::new(
                reqwest::Client::builder()
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .build()
                    .map_err(ConfigError::HttpClient)?,
            )
            .build(),
        };

        Ok(Self {
            base_url,
            client,
            default_headers,
            timeout: config.timeout,
        })
    }

    /// Builds a client from `XENDIT_API_KEY` / `XENDIT_BASE_URL`.
    ///
    /// # Errors
    ///
    /// See [`XenditConfig::from_env`] and [`XenditClient::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(XenditConfig::from_env()?)
    }

    /// Returns the base URL used by this client.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Recurring payment operations.
    #[must_use]
    pub const fn recurring_payments(&self) -> RecurringPayments<'_> {
        RecurringPayments::new(self)
    }

    /// Invoice operations.
    #[must_use]
    pub const fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self)
    }

    /// Resolves path segments against the base URL.
    ///
    /// Each segment is percent-encoded as a single path segment, so an ID
    /// can never escape into another path or the query string. Empty, `.`
    /// and `..` segments are rejected, since URL normalization would drop
    /// or resolve them.
    ///
    /// ```
    /// # use xendit::{XenditClient, XenditConfig};
    /// let client = XenditClient::new(
    ///     XenditConfig::new("xnd_development_...").with_base_url("https://api.xendit.co/"),
    /// )?;
    /// let url = client.endpoint(&["recurring_payments", "abc", "stop!"])?;
    /// assert_eq!(url.as_str(), "https://api.xendit.co/recurring_payments/abc/stop!");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`XenditError::UrlParse`] if the base URL cannot carry a path
    /// or a segment is empty, `.` or `..`.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, XenditError> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(XenditError::UrlParse {
                context: format!("invalid path segment {segment:?} in {segments:?}"),
            });
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| XenditError::UrlParse {
                context: format!("cannot append {segments:?} to {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request with only the default headers.
    ///
    /// # Errors
    ///
    /// See [`XenditClient::send`].
    pub async fn request<T>(
        &self,
        method: Method,
        url: Url,
        params: Option<&Params>,
    ) -> Result<T, XenditError>
    where
        T: DeserializeOwned,
    {
        self.send(method, url, None, params).await
    }

    /// Sends a request and deserializes the response into `T`.
    ///
    /// `headers` are merged over the default headers, replacing any default
    /// of the same name. `params` become the JSON body, except for `GET`
    /// where they are dropped; callers put GET parameters in the URL.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError::Api`] for structured error responses,
    /// a transport error (see [`XenditError::is_transport`]) when the
    /// exchange fails, or [`XenditError::JsonDeserialization`] when a 2xx
    /// body does not match `T`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "xendit.client.send",
            skip_all,
            fields(
                http.method = %method,
                url.path = %url.path(),
                http.status_code = tracing::field::Empty,
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty,
            )
        )
    )]
    pub async fn send<T>(
        &self,
        method: Method,
        url: Url,
        headers: Option<&HeaderMap>,
        params: Option<&Params>,
    ) -> Result<T, XenditError>
    where
        T: DeserializeOwned,
    {
        let context = format!("{method} {}", url.path());

        let mut merged = self.default_headers.clone();
        if let Some(headers) = headers {
            merged.extend(headers.clone());
        }

        let is_get = method == Method::GET;
        let mut req = self.client.request(method, url).headers(merged);
        if let Some(params) = params.filter(|_| !is_get) {
            req = req.json(params);
        }
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let result = match req.send().await {
            Ok(response) => Self::read_response(context, response).await,
            Err(source) => Err(XenditError::Http { context, source }),
        };

        record_result_on_span(&result);

        result
    }

    /// Maps a received response onto the result type or an error.
    async fn read_response<T>(context: String, response: reqwest::Response) -> Result<T, XenditError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        #[cfg(feature = "telemetry")]
        Span::current().record("http.status_code", status.as_u16());

        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => {
                return Err(XenditError::ResponseBodyRead {
                    context,
                    status,
                    source,
                });
            }
        };

        if status.is_success() {
            let parsed = serde_json::from_str::<T>(&body);
            return parsed.map_err(|source| XenditError::JsonDeserialization {
                context,
                body,
                source,
            });
        }

        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(error) => Err(ApiError::new(status, error).into()),
            Err(_) => Err(XenditError::HttpStatus {
                context,
                status,
                body,
            }),
        }
    }
}

impl fmt::Debug for XenditClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XenditClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Parses the configured base URL, ignoring trailing slashes.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim_end_matches('/')).map_err(|source| {
        ConfigError::InvalidBaseUrl {
            url: raw.to_owned(),
            source,
        }
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::CannotBeABase(raw.to_owned()));
    }
    Ok(url)
}

/// Builds the headers sent with every request: Basic auth with the API key
/// as username and an empty password, the library identification headers,
/// then any configured extras.
fn default_headers(config: &XenditConfig) -> Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();

    let token = BASE64_STANDARD.encode(format!("{}:", config.api_key));
    let mut auth = HeaderValue::from_str(&format!("Basic {token}"))
        .map_err(|_| ConfigError::InvalidHeader(AUTHORIZATION.to_string()))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(
        HeaderName::from_static(LIB_HEADER),
        HeaderValue::from_static(LIB_NAME),
    );
    headers.insert(
        HeaderName::from_static(LIB_VERSION_HEADER),
        HeaderValue::from_static(LIB_VERSION),
    );

    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeader(name.clone()))?;
        let value =
            HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidHeader(name.to_string()))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
            tracing::debug!("Xendit request succeeded");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Request to Xendit failed");
        }
    }
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R, E: Display>(_result: &Result<R, E>) {}
