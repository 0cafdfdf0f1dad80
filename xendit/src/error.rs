//! Error types for the Xendit client.
//!
//! [`XenditError`] is returned by every API call. It separates three
//! families of failure:
//!
//! - the API answered with a structured error body ([`XenditError::Api`]);
//! - the exchange itself failed: the request never got a response, the body
//!   could not be read, or a non-2xx body was not a structured error
//!   ([`XenditError::is_transport`]);
//! - the request could not be built, or a 2xx body did not match the
//!   expected type.

use std::fmt;

use http::StatusCode;
use xendit_proto::{ErrorBody, ProtoError};

/// A structured error returned by the Xendit API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Machine-readable error code, e.g. `NOT_FOUND_ERROR`.
    pub error_code: String,
    /// Human-readable message.
    pub message: String,
    /// Per-field validation details, when present.
    pub errors: Option<serde_json::Value>,
}

impl ApiError {
    /// Builds an [`ApiError`] from a parsed error body.
    #[must_use]
    pub fn new(status: StatusCode, body: ErrorBody) -> Self {
        Self {
            status,
            error_code: body.error_code,
            message: body.message,
            errors: body.errors,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.error_code, self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Errors that can occur while calling the Xendit API.
///
/// `context` fields name the call that failed, e.g. `"POST /recurring_payments"`.
#[derive(Debug, thiserror::Error)]
pub enum XenditError {
    /// The API returned a structured error body.
    #[error("Xendit API error: {0}")]
    Api(#[from] ApiError),

    /// The request could not be sent or no response was received.
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// Human-readable context.
        context: String,
        /// The underlying transport error.
        #[source]
        source: reqwest_middleware::Error,
    },

    /// Non-2xx response whose body is not a structured error.
    #[error("Unexpected HTTP status {status}: {context}: {body}")]
    HttpStatus {
        /// Human-readable context.
        context: String,
        /// The HTTP status code.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },

    /// The response body could not be read.
    #[error("Failed to read response body as text: {context}: {source}")]
    ResponseBodyRead {
        /// Human-readable context.
        context: String,
        /// The HTTP status code.
        status: StatusCode,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// A 2xx body did not match the expected result type.
    #[error("Failed to deserialize JSON: {context}: {source}")]
    JsonDeserialization {
        /// Human-readable context.
        context: String,
        /// The raw response body.
        body: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// An endpoint URL could not be built from the configured base URL.
    #[error("URL error: {context}")]
    UrlParse {
        /// Human-readable context.
        context: String,
    },

    /// Request parameters could not be serialized.
    #[error("Failed to serialize request parameters: {0}")]
    Serialize(#[from] ProtoError),
}

impl XenditError {
    /// Returns `true` for failures of the HTTP exchange itself: send
    /// failures, unreadable bodies, and non-2xx bodies that are not
    /// structured API errors.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::HttpStatus { .. } | Self::ResponseBodyRead { .. }
        )
    }

    /// Returns the HTTP status of the response, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::HttpStatus { status, .. } | Self::ResponseBodyRead { status, .. } => {
                Some(*status)
            }
            Self::Http {
                source: reqwest_middleware::Error::Reqwest(source),
                ..
            } => source.status(),
            Self::Http { .. }
            | Self::JsonDeserialization { .. }
            | Self::UrlParse { .. }
            | Self::Serialize(_) => None,
        }
    }

    /// Returns the structured API error, if this is one.
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors that can occur while building a [`crate::XenditClient`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No API key was configured.
    #[error("missing API key: set {0}")]
    MissingApiKey(&'static str),

    /// The base URL is not a valid absolute URL.
    #[error("invalid base URL {url}: {source}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The base URL cannot carry a path (e.g. `mailto:` URLs).
    #[error("base URL cannot be a base: {0}")]
    CannotBeABase(String),

    /// A header name or value is not valid HTTP.
    #[error("invalid header {0}")]
    InvalidHeader(String),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
