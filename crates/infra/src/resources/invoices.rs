use opsdesk_domain::{Invoice, InvoiceFilters, InvoiceUpdate, MarkPaid, NewInvoice};
use tracing::instrument;

use super::{item_path, Resource, ResourceApi};
use crate::api::{ApiError, MutationToasts};

/// `/invoices`
#[derive(Debug, Clone, Copy)]
pub struct Invoices;

impl Resource for Invoices {
    type Entity = Invoice;
    type Create = NewInvoice;
    type Update = InvoiceUpdate;
    type Filters = InvoiceFilters;

    const PATH: &'static str = "/invoices";
    const SINGULAR: &'static str = "Invoice";
    const PLURAL: &'static str = "invoices";
}

pub type InvoiceApi = ResourceApi<Invoices>;

impl ResourceApi<Invoices> {
    /// Mark an invoice paid. Without `paid_at` the server stamps the current time.
    #[instrument(skip(self))]
    pub async fn mark_paid(&self, invoice_id: &str, paid: MarkPaid) -> Result<Invoice, ApiError> {
        let path = format!("{}/paid", item_path(Invoices::PATH, invoice_id));
        let toasts = MutationToasts::new("Invoice marked as paid", "Failed to mark invoice as paid");
        self.client().mutate(&toasts, self.client().patch(&path, &paid)).await
    }
}
