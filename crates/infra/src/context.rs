//! Client context: one handle wiring every resource API to a shared
//! [`ApiClient`].

use std::sync::Arc;

use opsdesk_core::{Navigator, Notifier};
use opsdesk_domain::{ClientConfig, Session};

use crate::api::{ApiClient, ApiError};
use crate::resources::businesses::BusinessApi;
use crate::resources::cargos::CargoApi;
use crate::resources::contacts::ContactApi;
use crate::resources::delivery_lists::DeliveryListApi;
use crate::resources::invoices::InvoiceApi;
use crate::resources::items::ItemApi;
use crate::resources::orders::OrderApi;
use crate::resources::requested_items::RequestedItemApi;
use crate::resources::suppliers::SupplierApi;
use crate::resources::users::UserApi;
use crate::resources::{LibraryApi, ResourceApi};

/// All resource APIs over one connection pool, cookie jar and session.
#[derive(Clone)]
pub struct OpsDeskClient {
    pub api: ApiClient,
    pub businesses: BusinessApi,
    pub contacts: ContactApi,
    pub cargos: CargoApi,
    pub orders: OrderApi,
    pub suppliers: SupplierApi,
    pub items: ItemApi,
    pub invoices: InvoiceApi,
    pub delivery_lists: DeliveryListApi,
    pub requested_items: RequestedItemApi,
    pub library: LibraryApi,
    pub users: UserApi,
}

impl OpsDeskClient {
    /// Build with the given UI ports.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the API section of `config` is unusable.
    pub fn new(
        config: &ClientConfig,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let api = ApiClient::builder()
            .config(config.api.clone())
            .notifier(notifier)
            .navigator(navigator)
            .build()?;
        Ok(Self::from_api_client(api))
    }

    /// Build with tracing-backed toasts and navigation.
    pub fn headless(config: &ClientConfig) -> Result<Self, ApiError> {
        let api = ApiClient::builder().config(config.api.clone()).build()?;
        Ok(Self::from_api_client(api))
    }

    pub fn from_api_client(api: ApiClient) -> Self {
        Self {
            businesses: ResourceApi::new(api.clone()),
            contacts: ResourceApi::new(api.clone()),
            cargos: ResourceApi::new(api.clone()),
            orders: ResourceApi::new(api.clone()),
            suppliers: ResourceApi::new(api.clone()),
            items: ResourceApi::new(api.clone()),
            invoices: ResourceApi::new(api.clone()),
            delivery_lists: ResourceApi::new(api.clone()),
            requested_items: ResourceApi::new(api.clone()),
            library: LibraryApi::new(api.clone()),
            users: ResourceApi::new(api.clone()),
            api,
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.api.session().current()
    }
}
