//! Client constants
//!
//! Centralized location for the values the console hard-codes.

// Transport
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 100;
pub const DEFAULT_MAX_ATTEMPTS: usize = 1;
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 200;
pub const DEFAULT_USER_AGENT: &str = concat!("opsdesk-client/", env!("CARGO_PKG_VERSION"));

// Authorization boundary
pub const LOGIN_PATH: &str = "/login";
pub const ACCESS_DENIED_MESSAGE: &str = "Access Denied";
pub const FORBIDDEN_MESSAGE_PREFIX: &str = "Forbidden";

// Requested-item workflow
pub const OVERDUE_AFTER_DAYS: i64 = 30;

// Toast copy
pub const TOAST_LOADING: &str = "Processing...";
