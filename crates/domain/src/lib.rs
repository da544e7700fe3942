//! # OpsDesk Domain
//!
//! Business domain types and models for the OpsDesk console client.
//!
//! This crate contains:
//! - Entity types for every REST resource (businesses, contacts, cargos,
//!   orders, suppliers, items/TARICs, invoices, delivery lists, requested
//!   items, library files, users)
//! - Response envelope types
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other OpsDesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
