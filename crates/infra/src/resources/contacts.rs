use opsdesk_domain::{Contact, ContactFilters, ContactUpdate, NewContact};

use super::{Resource, ResourceApi};

/// `/contacts`
#[derive(Debug, Clone, Copy)]
pub struct Contacts;

impl Resource for Contacts {
    type Entity = Contact;
    type Create = NewContact;
    type Update = ContactUpdate;
    type Filters = ContactFilters;

    const PATH: &'static str = "/contacts";
    const SINGULAR: &'static str = "Contact";
    const PLURAL: &'static str = "contacts";
}

pub type ContactApi = ResourceApi<Contacts>;
