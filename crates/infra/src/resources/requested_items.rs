//! Requested items: the sourcing-request pipeline.

use opsdesk_core::{validate_new_requested_item, ValidationResult};
use opsdesk_domain::{
    ApiResponse, BulkDelete, BulkStatusUpdate, NewRequestedItem, RequestStatus, RequestedItem,
    RequestedItemFilters, RequestedItemUpdate,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::{discard, item_path, Resource, ResourceApi};
use crate::api::{ApiError, MutationToasts};

/// `/requested-items`
#[derive(Debug, Clone, Copy)]
pub struct RequestedItems;

impl Resource for RequestedItems {
    type Entity = RequestedItem;
    type Create = NewRequestedItem;
    type Update = RequestedItemUpdate;
    type Filters = RequestedItemFilters;

    const PATH: &'static str = "/requested-items";
    const SINGULAR: &'static str = "Requested item";
    const PLURAL: &'static str = "requested items";

    fn validate_create(payload: &NewRequestedItem) -> ValidationResult<()> {
        validate_new_requested_item(payload)
    }
}

pub type RequestedItemApi = ResourceApi<RequestedItems>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusChange {
    request_status: RequestStatus,
}

impl ResourceApi<RequestedItems> {
    /// List with the business filter forced to the signed-in user's tenant.
    ///
    /// Admins (and anonymous callers) keep whatever `business_id` they passed.
    #[instrument(skip(self, filters))]
    pub async fn list_for_session(
        &self,
        filters: &RequestedItemFilters,
    ) -> ApiResponse<Vec<RequestedItem>> {
        match self.client().session().tenant_scope() {
            Some(tenant) => {
                debug!(tenant = %tenant, "scoping requested items to tenant");
                let scoped = RequestedItemFilters { business_id: Some(tenant), ..filters.clone() };
                self.list(&scoped).await
            }
            None => self.list(filters).await,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_by_business(&self, business_id: &str) -> ApiResponse<Vec<RequestedItem>> {
        let path = item_path(&format!("{}/business", RequestedItems::PATH), business_id);
        self.client().read_list(&path, "Failed to load requested items").await
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> Result<RequestedItem, ApiError> {
        let path = format!("{}/status", item_path(RequestedItems::PATH, id));
        let toasts = MutationToasts::new("Status updated successfully", "Failed to update status");
        let body = StatusChange { request_status: status };
        self.client().mutate(&toasts, self.client().patch(&path, &body)).await
    }

    /// Move every id in `ids` to `status` in one call.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn bulk_update_status(
        &self,
        ids: &[String],
        status: RequestStatus,
    ) -> Result<(), ApiError> {
        let path = format!("{}/bulk/status", RequestedItems::PATH);
        let body = BulkStatusUpdate { ids: ids.to_vec(), request_status: status };
        let toasts = MutationToasts::new(
            format!("{} items updated successfully", ids.len()),
            "Failed to update items",
        );
        let call = discard(self.client().patch::<_, Value>(&path, &body));
        self.client().mutate(&toasts, call).await
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn bulk_delete(&self, ids: &[String]) -> Result<(), ApiError> {
        let path = format!("{}/bulk/delete", RequestedItems::PATH);
        let body = BulkDelete { ids: ids.to_vec() };
        let toasts = MutationToasts::new(
            format!("{} items deleted successfully", ids.len()),
            "Failed to delete items",
        );
        let call = discard(self.client().post::<_, Value>(&path, &body));
        self.client().mutate(&toasts, call).await
    }
}
