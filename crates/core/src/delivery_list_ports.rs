//! Delivery-list port used by in-place row editing.

use async_trait::async_trait;
use opsdesk_domain::{ListItem, ListItemPatch, Result};

/// Persists single-field edits of a delivery-list row.
#[async_trait]
pub trait ListItemWriter: Send + Sync {
    /// Apply `patch` and return the row as the server accepted it.
    async fn update_list_item(
        &self,
        list_id: &str,
        item_id: &str,
        patch: ListItemPatch,
    ) -> Result<ListItem>;
}
