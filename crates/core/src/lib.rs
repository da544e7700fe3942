//! # OpsDesk Core
//!
//! Client-side business logic - no HTTP or platform code.
//!
//! This crate contains:
//! - Envelope normalization and query-string building
//! - Derived views over requested items (sorting, overdue, badges, filters)
//! - Optimistic per-cell editing
//! - Port interfaces (traits) for toasts, navigation and list-item writes
//!
//! ## Architecture Principles
//! - Only depends on `opsdesk-domain`
//! - All side effects go through traits implemented in `opsdesk-infra`
//! - Pure, testable logic

pub mod editing;
pub mod envelope;
pub mod query;
pub mod requested_items;
pub mod validation;

// Ports
pub mod delivery_list_ports;
pub mod notification_ports;

pub use delivery_list_ports::ListItemWriter;
pub use editing::{CommitOutcome, EditableCell, ListItemRow};
pub use envelope::{extract_message, normalize_envelope};
pub use notification_ports::{Navigator, Notifier, ToastId};
pub use query::{build_query, query_from_value, with_query, QueryError};
pub use requested_items::{
    filter_items, is_overdue, needs_attention, parse_timestamp, priority_badge_variant,
    sort_items_by_priority_and_date, sorted_by_priority_and_date, status_badge_variant,
    status_label, status_phase, validate_new_requested_item, BadgeVariant, ItemFilter,
};
pub use validation::{FieldError, ValidationError, ValidationResult};
