use opsdesk_domain::{Cargo, CargoFilters, CargoUpdate, NewCargo};

use super::{Resource, ResourceApi};

/// `/cargos`
#[derive(Debug, Clone, Copy)]
pub struct Cargos;

impl Resource for Cargos {
    type Entity = Cargo;
    type Create = NewCargo;
    type Update = CargoUpdate;
    type Filters = CargoFilters;

    const PATH: &'static str = "/cargos";
    const SINGULAR: &'static str = "Cargo";
    const PLURAL: &'static str = "cargos";
}

pub type CargoApi = ResourceApi<Cargos>;
