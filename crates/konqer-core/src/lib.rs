//! # Konqer Core Library
//!
//! Domain types and the service catalog for the Konqer platform.
//!
//! ## Modules
//!
//! - `branding` - Centralized branding constants (names, domains, ports)
//! - `catalog` - Service catalog: descriptor types, builtin definition, lookup
//! - `entitlement` - Per-user entitlement shape owned by the external gateway

pub mod branding;
pub mod catalog;
pub mod entitlement;

// Re-export commonly used types
pub use catalog::{CatalogError, ServiceCatalog, ServiceDescriptor, ServiceKind};
pub use entitlement::UserServiceEntitlement;
