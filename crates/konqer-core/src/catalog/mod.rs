//! Service Catalog
//!
//! Process-wide, read-only registry of the productized services. The catalog
//! is constructed once at startup, is never mutated afterwards, and is shared
//! across request handlers without locking (no write path exists).

mod builtin;
mod types;

pub use types::{ServiceDescriptor, ServiceKind};

use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while constructing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two descriptors share the same slug
    #[error("duplicate slug in catalog definition: {0}")]
    DuplicateSlug(String),
}

/// Immutable, in-memory registry of service descriptors
///
/// Construct explicitly and inject into whatever needs lookups; tests build
/// their own instances instead of relying on process-wide state.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<ServiceDescriptor>,
}

impl ServiceCatalog {
    /// Create a catalog from an explicit list of descriptors
    ///
    /// Insertion order is preserved and becomes the listing order. Rejects
    /// definitions where two descriptors share a slug.
    pub fn new(services: Vec<ServiceDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for descriptor in &services {
            if !seen.insert(descriptor.slug.clone()) {
                return Err(CatalogError::DuplicateSlug(descriptor.slug.clone()));
            }
        }
        Ok(Self { services })
    }

    /// The builtin production catalog: the 12 Konqer services in launch order
    pub fn builtin() -> Self {
        Self::new(builtin::descriptors()).expect("builtin catalog has unique slugs")
    }

    /// Every descriptor, in stable insertion order
    pub fn list_all(&self) -> &[ServiceDescriptor] {
        &self.services
    }

    /// Exact, case-sensitive lookup by slug
    ///
    /// Absence is `None`, not an error; the API layer maps it to 404.
    pub fn find_by_slug(&self, slug: &str) -> Option<&ServiceDescriptor> {
        self.services.iter().find(|s| s.slug == slug)
    }

    /// Number of descriptors in the catalog
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// True when the catalog holds no descriptors
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
