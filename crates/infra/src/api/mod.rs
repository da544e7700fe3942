//! REST API adapter
//!
//! [`ApiClient`] turns HTTP exchanges into typed results: it normalizes the
//! response envelope, maps statuses onto [`ApiError`], redirects to the login
//! page on 401, and applies the toast policy (reads swallow errors, writes
//! propagate them).

pub mod client;
pub mod errors;
pub mod policy;

pub use client::{ApiClient, ApiClientBuilder};
pub use errors::{ApiError, ApiErrorCategory};
pub use policy::MutationToasts;
