//! API-specific error types
//!
//! Classifies failed calls and extracts the text shown to the user.

use opsdesk_core::ValidationError;
use opsdesk_domain::constants::{ACCESS_DENIED_MESSAGE, FORBIDDEN_MESSAGE_PREFIX};
use opsdesk_domain::OpsDeskError;
use reqwest::StatusCode;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401 and 403
    Authentication,
    /// 429
    RateLimit,
    /// 5xx and undecodable payloads
    Server,
    /// Other 4xx, rejected envelopes and failed client-side validation
    Client,
    /// Connection failures and timeouts
    Network,
    Config,
}

impl ApiErrorCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::RateLimit => "rate_limit",
            Self::Server => "server",
            Self::Client => "client",
            Self::Network => "network",
            Self::Config => "config",
        }
    }
}

/// API operation errors
///
/// HTTP failures keep the `message` field of the response body, if the server
/// sent one, separately from the display text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed with status code 401")]
    Unauthorized { message: Option<String> },

    #[error("Request failed with status code 403")]
    Forbidden { message: Option<String> },

    #[error("Request failed with status code 404")]
    NotFound { message: Option<String> },

    #[error("Request failed with status code 429")]
    RateLimit { message: Option<String> },

    #[error("Request failed with status code {status}")]
    Server { status: u16, message: Option<String> },

    #[error("Request failed with status code {status}")]
    Client { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered 2xx with `success: false`.
    #[error("{}", .message.as_deref().unwrap_or_default())]
    Rejected { message: Option<String> },
}

impl ApiError {
    /// Map a non-2xx response onto an error variant.
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized { message },
            StatusCode::FORBIDDEN => Self::Forbidden { message },
            StatusCode::NOT_FOUND => Self::NotFound { message },
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimit { message },
            s if s.is_server_error() => Self::Server { status: s.as_u16(), message },
            s => Self::Client { status: s.as_u16(), message },
        }
    }

    /// Get the error category for this error
    pub const fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Unauthorized { .. } | Self::Forbidden { .. } => ApiErrorCategory::Authentication,
            Self::RateLimit { .. } => ApiErrorCategory::RateLimit,
            Self::Server { .. } | Self::Decode(_) => ApiErrorCategory::Server,
            Self::NotFound { .. }
            | Self::Client { .. }
            | Self::Validation(_)
            | Self::Rejected { .. } => ApiErrorCategory::Client,
            Self::Network(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Whether repeating the same request may succeed.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Server { .. } | Self::RateLimit { .. } | Self::Network(_))
    }

    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::RateLimit { .. } => Some(429),
            Self::Server { status, .. } | Self::Client { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message the server put in the response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::RateLimit { message }
            | Self::Server { message, .. }
            | Self::Client { message, .. }
            | Self::Rejected { message } => {
                message.as_deref().map(str::trim).filter(|m| !m.is_empty())
            }
            _ => None,
        }
    }

    /// A 403 that only means "this role may not see that"; it is logged,
    /// never toasted.
    pub fn is_soft_deny(&self) -> bool {
        match self {
            Self::Forbidden { message: Some(message) } => {
                message == ACCESS_DENIED_MESSAGE || message.starts_with(FORBIDDEN_MESSAGE_PREFIX)
            }
            _ => false,
        }
    }

    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Toast text: server message, else display text, else `default`.
    pub fn user_message(&self, default: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        let display = self.to_string();
        if display.trim().is_empty() {
            default.to_string()
        } else {
            display
        }
    }
}

impl From<OpsDeskError> for ApiError {
    fn from(err: OpsDeskError) -> Self {
        match err {
            OpsDeskError::Network(message) => Self::Network(message),
            OpsDeskError::Config(message) => Self::Config(message),
            OpsDeskError::Auth(message) => Self::Unauthorized { message: Some(message) },
            OpsDeskError::Forbidden(message) => Self::Forbidden { message: Some(message) },
            OpsDeskError::NotFound(message) => Self::NotFound { message: Some(message) },
            OpsDeskError::InvalidInput(message) => Self::Client { status: 400, message: Some(message) },
            OpsDeskError::Server(message) | OpsDeskError::Internal(message) => {
                Self::Server { status: 500, message: Some(message) }
            }
        }
    }
}

impl From<ApiError> for OpsDeskError {
    fn from(err: ApiError) -> Self {
        let message = err.user_message("request failed");
        match err {
            ApiError::Unauthorized { .. } => Self::Auth(message),
            ApiError::Forbidden { .. } => Self::Forbidden(message),
            ApiError::NotFound { .. } => Self::NotFound(message),
            ApiError::Client { .. } | ApiError::Validation(_) | ApiError::Rejected { .. } => {
                Self::InvalidInput(message)
            }
            ApiError::RateLimit { .. } | ApiError::Network(_) => Self::Network(message),
            ApiError::Server { .. } | ApiError::Decode(_) => Self::Server(message),
            ApiError::Config(_) => Self::Config(message),
        }
    }
}
