//! Catalog items and their TARIC customs codes.

use opsdesk_domain::{
    ApiResponse, Item, ItemFilters, ItemUpdate, NewItem, NewTaric, Taric, TaricAssignment,
};
use tracing::instrument;

use super::{item_path, Resource, ResourceApi};
use crate::api::{ApiError, MutationToasts};

/// `/items`
#[derive(Debug, Clone, Copy)]
pub struct Items;

impl Resource for Items {
    type Entity = Item;
    type Create = NewItem;
    type Update = ItemUpdate;
    type Filters = ItemFilters;

    const PATH: &'static str = "/items";
    const SINGULAR: &'static str = "Item";
    const PLURAL: &'static str = "items";
}

pub type ItemApi = ResourceApi<Items>;

const TARICS_PATH: &str = "/items/tarics";

impl ResourceApi<Items> {
    #[instrument(skip(self))]
    pub async fn list_tarics(&self) -> ApiResponse<Vec<Taric>> {
        self.client().read_list(TARICS_PATH, "Failed to load TARIC codes").await
    }

    #[instrument(skip(self, taric), fields(code = %taric.code))]
    pub async fn create_taric(&self, taric: &NewTaric) -> Result<Taric, ApiError> {
        let toasts = MutationToasts::new("TARIC code created successfully", "Failed to create TARIC code");
        self.client().mutate(&toasts, self.client().post(TARICS_PATH, taric)).await
    }

    /// Attach a TARIC code to an item and return the updated item.
    #[instrument(skip(self))]
    pub async fn assign_taric(&self, item_id: &str, taric_id: &str) -> Result<Item, ApiError> {
        let path = format!("{}/taric", item_path(Items::PATH, item_id));
        let body = TaricAssignment { taric_id: taric_id.to_string() };
        let toasts = MutationToasts::new("TARIC code assigned", "Failed to assign TARIC code");
        self.client().mutate(&toasts, self.client().patch(&path, &body)).await
    }
}
