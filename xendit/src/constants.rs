//! Xendit API constants: default endpoint, environment variables and header names.

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.xendit.co";

/// Environment variable holding the secret API key.
pub const API_KEY_ENV: &str = "XENDIT_API_KEY";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "XENDIT_BASE_URL";

/// Header identifying the client library.
pub const LIB_HEADER: &str = "xendit-lib";

/// Header carrying the client library version.
pub const LIB_VERSION_HEADER: &str = "xendit-lib-ver";

/// Value sent in [`LIB_HEADER`].
pub const LIB_NAME: &str = "rust";

/// Value sent in [`LIB_VERSION_HEADER`].
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header making a create request idempotent.
pub const IDEMPOTENCY_KEY_HEADER: &str = "x-idempotency-key";

/// Header issuing a request on behalf of a sub-account.
pub const FOR_USER_ID_HEADER: &str = "for-user-id";
