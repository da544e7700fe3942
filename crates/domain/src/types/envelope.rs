//! Response envelope types
//!
//! The backend is inconsistent about wrapping: some endpoints answer with
//! `{ success, data, message }`, some with the bare payload. Callers only ever
//! see [`ApiResponse`]; the raw [`Envelope`] exists for the one place that
//! normalizes wire payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-facing result of a read operation.
///
/// Read operations never fail; on any error they yield `success: false`
/// together with an empty default (`[]` for lists, `None` for single fetches).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }

    pub fn into_data(self) -> T {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse { success: self.success, data: f(self.data) }
    }
}

impl<T: Default> ApiResponse<T> {
    /// Failed read with the safe empty default.
    pub fn failure() -> Self {
        Self { success: false, data: T::default() }
    }
}

/// Normalized wire envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// Wrap a payload that arrived without an envelope.
    pub fn wrap(data: Value) -> Self {
        Self { success: true, data, message: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_uses_empty_defaults() {
        let list: ApiResponse<Vec<String>> = ApiResponse::failure();
        assert!(!list.success);
        assert!(list.data.is_empty());

        let single: ApiResponse<Option<String>> = ApiResponse::failure();
        assert_eq!(single, ApiResponse { success: false, data: None });
    }

    #[test]
    fn map_keeps_success_flag() {
        let response = ApiResponse::ok(vec![1, 2, 3]).map(|items| items.len());
        assert_eq!(response, ApiResponse { success: true, data: 3 });
    }
}
