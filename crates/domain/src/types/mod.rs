//! Domain types and models
//!
//! One module per resource family; payload (`New*`, `*Update`) and filter
//! types live next to the entity they belong to.

pub mod business;
pub mod catalog;
pub mod envelope;
pub mod invoice;
pub mod library;
pub mod logistics;
pub mod requested_item;
pub mod user;

pub use business::{
    Address, Business, BusinessFilters, BusinessUpdate, Contact, ContactFilters, ContactUpdate,
    NewBusiness, NewContact,
};
pub use catalog::{
    Item, ItemFilters, ItemUpdate, NewItem, NewSupplier, NewTaric, Supplier, SupplierFilters,
    SupplierUpdate, Taric, TaricAssignment,
};
pub use envelope::{ApiResponse, Envelope};
pub use invoice::{Invoice, InvoiceFilters, InvoiceStatus, InvoiceUpdate, MarkPaid, NewInvoice};
pub use library::{FileUpload, LibraryFile, LibraryFilters};
pub use logistics::{
    Cargo, CargoFilters, CargoMode, CargoUpdate, DeliveryList, DeliveryListFilters,
    DeliveryListUpdate, ListItem, ListItemPatch, NewCargo, NewDeliveryList, NewOrder,
    NewOrderItem, Order, OrderFilters, OrderItem, OrderStatus, OrderStatusChange, OrderUpdate,
};
pub use requested_item::{
    BulkDelete, BulkStatusUpdate, DeliveryInterval, ExtraItems, NewRequestedItem, Priority,
    RequestStatus, RequestedItem, RequestedItemFilters, RequestedItemUpdate, StatusLabel,
};
pub use user::{LoginRequest, NewUser, Session, User, UserFilters, UserRole, UserUpdate};
