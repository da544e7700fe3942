//! Toast policy shared by all resource modules
//!
//! Reads never fail: errors are toasted and turned into
//! `ApiResponse { success: false, .. }` with an empty default. Writes show a
//! loading toast, dismiss it when the call settles, toast the outcome and hand
//! the error back to the caller.

use std::future::Future;

use opsdesk_domain::constants::TOAST_LOADING;
use opsdesk_domain::ApiResponse;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::client::ApiClient;
use super::errors::ApiError;

/// Copy for the toasts shown around one mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationToasts {
    pub loading: String,
    pub success: String,
    /// Shown when the error carries no usable message of its own.
    pub failure: String,
}

impl MutationToasts {
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self { loading: TOAST_LOADING.to_string(), success: success.into(), failure: failure.into() }
    }

    pub fn with_loading(mut self, loading: impl Into<String>) -> Self {
        self.loading = loading.into();
        self
    }
}

impl ApiClient {
    /// GET a list; `{ success: false, data: [] }` on any failure.
    pub async fn read_list<T: DeserializeOwned>(
        &self,
        path: &str,
        failure: &str,
    ) -> ApiResponse<Vec<T>> {
        match self.get::<Option<Vec<T>>>(path).await {
            Ok(items) => ApiResponse::ok(items.unwrap_or_default()),
            Err(err) => {
                self.report_failure(&err, failure);
                ApiResponse::failure()
            }
        }
    }

    /// GET a single record; `{ success: false, data: None }` on any failure.
    pub async fn read_one<T: DeserializeOwned>(
        &self,
        path: &str,
        failure: &str,
    ) -> ApiResponse<Option<T>> {
        match self.get::<Option<T>>(path).await {
            Ok(item) => ApiResponse::ok(item),
            Err(err) => {
                self.report_failure(&err, failure);
                ApiResponse::failure()
            }
        }
    }

    /// Run a write under the loading/success/error toast sequence.
    ///
    /// The loading toast is always dismissed before the outcome toast is shown
    /// and before the error is returned.
    pub async fn mutate<T, Fut>(&self, toasts: &MutationToasts, call: Fut) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let toast = self.notifier.loading(&toasts.loading);
        let result = call.await;
        self.notifier.dismiss(toast);

        match &result {
            Ok(_) => self.notifier.success(&toasts.success),
            Err(err) => self.report_failure(err, &toasts.failure),
        }
        result
    }

    /// Toast a failed call unless it is a 401 (already redirected) or a 403
    /// soft-deny.
    pub fn report_failure(&self, err: &ApiError, default_message: &str) {
        if err.is_unauthorized() {
            debug!(error = %err, "unauthorized call; redirect already issued");
            return;
        }
        if err.is_soft_deny() {
            debug!(message = err.server_message().unwrap_or_default(), "authorization soft-deny");
            return;
        }

        warn!(
            error = %err,
            category = err.category().as_str(),
            status = err.status_code(),
            "API call failed"
        );
        self.notifier.error(&err.user_message(default_message));
    }
}
