//! Core types for the service catalog

use serde::{Deserialize, Serialize};

/// Marketing pillar a service is sold under
///
/// The line-up is fixed, so the category is a closed enumeration rather than
/// free text. Serializes lowercase on the wire (`"outbound"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Outbound prospecting and deliverability tooling
    Outbound,
    /// Sales enablement and pitch collateral
    Enablement,
    /// Audience-facing content production
    Content,
}

/// One immutable entry in the service catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Unique, URL-safe identifier; lookup key and the service's subdomain
    pub slug: String,
    /// Human-readable display name
    pub name: String,
    /// Category pillar; wire field name is `type`
    #[serde(rename = "type")]
    pub kind: ServiceKind,
}
