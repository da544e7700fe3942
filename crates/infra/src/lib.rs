//! # OpsDesk Infrastructure
//!
//! HTTP implementation of the OpsDesk console client.
//!
//! This crate contains:
//! - The reqwest-based transport with cookie store, timeout and optional retry
//! - The JSON API client (envelope handling, 401 redirect, error mapping)
//! - The read/write toast policy and per-entity resource APIs
//! - Session storage, configuration loading and tracing setup
//!
//! ## Architecture
//! - Implements ports defined in `opsdesk-core`
//! - Depends on `opsdesk-domain` and `opsdesk-core`
//! - Contains all I/O

pub mod api;
pub mod config;
pub mod context;
pub mod errors;
pub mod http;
pub mod observability;
pub mod resources;
pub mod session;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientBuilder, ApiError, ApiErrorCategory, MutationToasts};
pub use context::OpsDeskClient;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::{init_tracing, TracingNavigator, TracingNotifier};
pub use resources::{LibraryApi, Resource, ResourceApi};
pub use session::SessionStore;
