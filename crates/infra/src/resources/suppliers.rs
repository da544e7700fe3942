use opsdesk_domain::{NewSupplier, Supplier, SupplierFilters, SupplierUpdate};

use super::{Resource, ResourceApi};

/// `/suppliers`
#[derive(Debug, Clone, Copy)]
pub struct Suppliers;

impl Resource for Suppliers {
    type Entity = Supplier;
    type Create = NewSupplier;
    type Update = SupplierUpdate;
    type Filters = SupplierFilters;

    const PATH: &'static str = "/suppliers";
    const SINGULAR: &'static str = "Supplier";
    const PLURAL: &'static str = "suppliers";
}

pub type SupplierApi = ResourceApi<Suppliers>;
