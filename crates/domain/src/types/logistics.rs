//! Cargo, order and delivery-list types

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::requested_item::DeliveryInterval;
use crate::impl_domain_label_conversions;

/// Transport mode of a cargo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CargoMode {
    Sea,
    Air,
    Rail,
    Truck,
}

impl_domain_label_conversions!(CargoMode {
    Sea => "sea",
    Air => "air",
    Rail => "rail",
    Truck => "truck",
});

/// Consolidated shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cargo {
    pub id: String,
    pub cargo_no: String,
    #[serde(default)]
    pub mode: Option<CargoMode>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub container_no: Option<String>,
    #[serde(default)]
    pub etd: Option<String>,
    #[serde(default)]
    pub eta: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub volume_cbm: Option<f64>,
    #[serde(default)]
    pub order_ids: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCargo {
    pub cargo_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<CargoMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_cbm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoFilters {
    pub status: Option<String>,
    pub mode: Option<CargoMode>,
    pub search: Option<String>,
}

/// Lifecycle of a purchase order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Open,
    Confirmed,
    InProduction,
    Shipped,
    Delivered,
    Cancelled,
}

impl_domain_label_conversions!(OrderStatus {
    Open => "open",
    Confirmed => "confirmed",
    InProduction => "in_production",
    Shipped => "shipped",
    Delivered => "delivered",
    Cancelled => "cancelled",
});

/// Purchase order placed with a supplier on behalf of a business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_no: String,
    #[serde(default)]
    pub business_id: Option<String>,
    #[serde(default)]
    pub supplier_id: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub item_id: String,
    #[serde(default)]
    pub item_name: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub item_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub order_no: String,
    pub business_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilters {
    pub business_id: Option<String>,
    pub supplier_id: Option<String>,
    pub status: Option<OrderStatus>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Body of the order status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderStatusChange {
    pub status: OrderStatus,
}

/// Named delivery list a business orders from repeatedly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryList {
    pub id: String,
    pub name: String,
    pub business_id: String,
    #[serde(default)]
    pub item_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeliveryList {
    pub name: String,
    pub business_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryListUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryListFilters {
    pub business_id: Option<String>,
    pub search: Option<String>,
}

/// Row of a delivery list; every field after `item_name` is edited in place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub list_id: String,
    pub item_id: String,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub interval: Option<DeliveryInterval>,
    #[serde(default)]
    pub marked: bool,
}

/// Single-field patch for a list item cell
///
/// `interval` is doubly optional: `None` leaves it out of the body,
/// `Some(None)` sends an explicit `null` that clears the cadence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Option<DeliveryInterval>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marked: Option<bool>,
}
