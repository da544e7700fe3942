//! Delivery lists and their rows.
//!
//! Rows are patched one field at a time; [`ListItemWriter`] lets the
//! optimistic cells in `opsdesk-core` save through this API.

use async_trait::async_trait;
use opsdesk_core::ListItemWriter;
use opsdesk_domain::{
    ApiResponse, DeliveryList, DeliveryListFilters, DeliveryListUpdate, ListItem, ListItemPatch,
    NewDeliveryList, OpsDeskError,
};
use tracing::instrument;

use super::{item_path, Resource, ResourceApi};
use crate::api::{ApiError, MutationToasts};

/// `/delivery-lists`
#[derive(Debug, Clone, Copy)]
pub struct DeliveryLists;

impl Resource for DeliveryLists {
    type Entity = DeliveryList;
    type Create = NewDeliveryList;
    type Update = DeliveryListUpdate;
    type Filters = DeliveryListFilters;

    const PATH: &'static str = "/delivery-lists";
    const SINGULAR: &'static str = "Delivery list";
    const PLURAL: &'static str = "delivery lists";
}

pub type DeliveryListApi = ResourceApi<DeliveryLists>;

fn list_items_path(list_id: &str) -> String {
    format!("{}/items", item_path(DeliveryLists::PATH, list_id))
}

impl ResourceApi<DeliveryLists> {
    #[instrument(skip(self))]
    pub async fn list_items(&self, list_id: &str) -> ApiResponse<Vec<ListItem>> {
        self.client().read_list(&list_items_path(list_id), "Failed to load list items").await
    }

    /// Patch the fields set in `patch` on one row.
    #[instrument(skip(self, patch))]
    pub async fn update_list_item(
        &self,
        list_id: &str,
        item_id: &str,
        patch: &ListItemPatch,
    ) -> Result<ListItem, ApiError> {
        let path = format!("{}/{}", list_items_path(list_id), urlencoding::encode(item_id));
        let toasts = MutationToasts::new("List item updated", "Failed to update list item");
        self.client().mutate(&toasts, self.client().patch(&path, patch)).await
    }
}

#[async_trait]
impl ListItemWriter for ResourceApi<DeliveryLists> {
    async fn update_list_item(
        &self,
        list_id: &str,
        item_id: &str,
        patch: ListItemPatch,
    ) -> Result<ListItem, OpsDeskError> {
        ResourceApi::<DeliveryLists>::update_list_item(self, list_id, item_id, &patch)
            .await
            .map_err(OpsDeskError::from)
    }
}
