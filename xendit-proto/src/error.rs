//! The error body returned by the Xendit API on 4xx/5xx responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured error body, e.g.
/// `{"error_code": "NOT_FOUND_ERROR", "message": "Could not find recurring payment"}`.
///
/// Both `error_code` and `message` are required; a body missing either is
/// not treated as a structured error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error_code: String,

    /// Human-readable message.
    pub message: String,

    /// Per-field validation details, when the API provides them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}
