//! Purchase orders, their line items and status changes.

use opsdesk_domain::{
    ApiResponse, NewOrder, Order, OrderFilters, OrderItem, OrderStatus, OrderStatusChange,
    OrderUpdate,
};
use tracing::instrument;

use super::{item_path, Resource, ResourceApi};
use crate::api::{ApiError, MutationToasts};

/// `/orders`
#[derive(Debug, Clone, Copy)]
pub struct Orders;

impl Resource for Orders {
    type Entity = Order;
    type Create = NewOrder;
    type Update = OrderUpdate;
    type Filters = OrderFilters;

    const PATH: &'static str = "/orders";
    const SINGULAR: &'static str = "Order";
    const PLURAL: &'static str = "orders";
}

pub type OrderApi = ResourceApi<Orders>;

impl ResourceApi<Orders> {
    /// Line items of one order.
    #[instrument(skip(self))]
    pub async fn list_items(&self, order_id: &str) -> ApiResponse<Vec<OrderItem>> {
        let path = format!("{}/items", item_path(Orders::PATH, order_id));
        self.client().read_list(&path, "Failed to load order items").await
    }

    #[instrument(skip(self))]
    pub async fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order, ApiError> {
        let path = format!("{}/status", item_path(Orders::PATH, order_id));
        let toasts = MutationToasts::new("Order status updated", "Failed to update order status");
        let body = OrderStatusChange { status };
        self.client().mutate(&toasts, self.client().patch(&path, &body)).await
    }
}
