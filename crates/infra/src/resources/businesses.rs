use opsdesk_domain::{Business, BusinessFilters, BusinessUpdate, NewBusiness};

use super::{Resource, ResourceApi};

/// `/businesses`
#[derive(Debug, Clone, Copy)]
pub struct Businesses;

impl Resource for Businesses {
    type Entity = Business;
    type Create = NewBusiness;
    type Update = BusinessUpdate;
    type Filters = BusinessFilters;

    const PATH: &'static str = "/businesses";
    const SINGULAR: &'static str = "Business";
    const PLURAL: &'static str = "businesses";
}

pub type BusinessApi = ResourceApi<Businesses>;
