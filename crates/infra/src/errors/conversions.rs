//! Conversions from external infrastructure errors into domain errors.

use opsdesk_domain::OpsDeskError;
use reqwest::Error as HttpError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub OpsDeskError);

impl From<InfraError> for OpsDeskError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<OpsDeskError> for InfraError {
    fn from(value: OpsDeskError) -> Self {
        InfraError(value)
    }
}

trait IntoOpsDeskError {
    fn into_opsdesk(self) -> OpsDeskError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → OpsDeskError */
/* -------------------------------------------------------------------------- */

impl IntoOpsDeskError for HttpError {
    fn into_opsdesk(self) -> OpsDeskError {
        if self.is_timeout() {
            return OpsDeskError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return OpsDeskError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return OpsDeskError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return OpsDeskError::Server(format!("undecodable HTTP response: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 => OpsDeskError::Auth(message),
                403 => OpsDeskError::Forbidden(message),
                404 => OpsDeskError::NotFound(message),
                429 => OpsDeskError::Network(message),
                400..=499 => OpsDeskError::InvalidInput(message),
                500..=599 => OpsDeskError::Server(message),
                _ => OpsDeskError::Network(message),
            };
        }

        OpsDeskError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_opsdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → OpsDeskError */
/* -------------------------------------------------------------------------- */

impl IntoOpsDeskError for TomlError {
    fn into_opsdesk(self) -> OpsDeskError {
        OpsDeskError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_opsdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
