//! Per-entity REST modules
//!
//! Every entity implements [`Resource`] and gets the generic contract from
//! [`ResourceApi`]:
//!
//! - `list` and `get_by_id` never fail; errors become
//!   `ApiResponse { success: false, .. }` plus an error toast
//! - `create`, `update` and `delete` run under the loading/success/error
//!   toast sequence and return the error to the caller
//!
//! Entity-specific endpoints are inherent methods on
//! `ResourceApi<TheEntity>` in the entity's module.

pub mod businesses;
pub mod cargos;
pub mod contacts;
pub mod delivery_lists;
pub mod invoices;
pub mod items;
pub mod library;
pub mod orders;
pub mod requested_items;
pub mod suppliers;
pub mod users;

use std::marker::PhantomData;

use opsdesk_core::{build_query, with_query, ValidationResult};
use opsdesk_domain::ApiResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::api::{ApiClient, ApiError, MutationToasts};

pub use businesses::Businesses;
pub use cargos::Cargos;
pub use contacts::Contacts;
pub use delivery_lists::DeliveryLists;
pub use invoices::Invoices;
pub use items::Items;
pub use library::LibraryApi;
pub use orders::Orders;
pub use requested_items::RequestedItems;
pub use suppliers::Suppliers;
pub use users::Users;

/// Static description of one REST collection.
pub trait Resource: Send + Sync + 'static {
    type Entity: DeserializeOwned + Send;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;
    type Filters: Serialize + Send + Sync;

    /// Collection path relative to the API base URL, e.g. `/businesses`
    const PATH: &'static str;
    /// Singular noun for toasts, e.g. `"Business"`
    const SINGULAR: &'static str;
    /// Plural noun for toasts, e.g. `"businesses"`
    const PLURAL: &'static str;

    /// Client-side checks run before `create` sends anything.
    fn validate_create(_payload: &Self::Create) -> ValidationResult<()> {
        Ok(())
    }
}

/// Typed client for one [`Resource`].
pub struct ResourceApi<R: Resource> {
    client: ApiClient,
    _resource: PhantomData<R>,
}

impl<R: Resource> Clone for ResourceApi<R> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

impl<R: Resource> ResourceApi<R> {
    pub fn new(client: ApiClient) -> Self {
        Self { client, _resource: PhantomData }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    #[instrument(skip(self, filters), fields(resource = R::PATH))]
    pub async fn list(&self, filters: &R::Filters) -> ApiResponse<Vec<R::Entity>> {
        let failure = format!("Failed to load {}", R::PLURAL);
        match build_query(filters) {
            Ok(query) => self.client.read_list(&with_query(R::PATH, &query), &failure).await,
            Err(err) => {
                self.client.report_failure(&ApiError::Config(err.to_string()), &failure);
                ApiResponse::failure()
            }
        }
    }

    #[instrument(skip(self), fields(resource = R::PATH))]
    pub async fn get_by_id(&self, id: &str) -> ApiResponse<Option<R::Entity>> {
        let failure = format!("Failed to load {}", R::SINGULAR.to_lowercase());
        self.client.read_one(&item_path(R::PATH, id), &failure).await
    }

    #[instrument(skip(self, payload), fields(resource = R::PATH))]
    pub async fn create(&self, payload: &R::Create) -> Result<R::Entity, ApiError> {
        let failure = format!("Failed to create {}", R::SINGULAR.to_lowercase());
        if let Err(invalid) = R::validate_create(payload) {
            let err = ApiError::Validation(invalid);
            self.client.report_failure(&err, &failure);
            return Err(err);
        }

        let toasts = MutationToasts::new(format!("{} created successfully", R::SINGULAR), failure);
        self.client.mutate(&toasts, self.client.post(R::PATH, payload)).await
    }

    #[instrument(skip(self, payload), fields(resource = R::PATH))]
    pub async fn update(&self, id: &str, payload: &R::Update) -> Result<R::Entity, ApiError> {
        let toasts = MutationToasts::new(
            format!("{} updated successfully", R::SINGULAR),
            format!("Failed to update {}", R::SINGULAR.to_lowercase()),
        );
        let path = item_path(R::PATH, id);
        self.client.mutate(&toasts, self.client.put(&path, payload)).await
    }

    #[instrument(skip(self), fields(resource = R::PATH))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let toasts = MutationToasts::new(
            format!("{} deleted successfully", R::SINGULAR),
            format!("Failed to delete {}", R::SINGULAR.to_lowercase()),
        );
        let path = item_path(R::PATH, id);
        self.client.mutate(&toasts, discard(self.client.delete::<Value>(&path))).await
    }
}

/// `{collection}/{id}` with the id percent-encoded.
pub(crate) fn item_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", urlencoding::encode(id))
}

/// Drop whatever payload a write returned.
pub(crate) async fn discard<F>(call: F) -> Result<(), ApiError>
where
    F: std::future::Future<Output = Result<Value, ApiError>>,
{
    call.await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_encodes_ids() {
        assert_eq!(item_path("/businesses", "b-1"), "/businesses/b-1");
        assert_eq!(item_path("/library", "a b/c"), "/library/a%20b%2Fc");
    }
}
