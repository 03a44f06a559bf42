//! HTTP handlers for the catalog API

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use konqer_core::{branding, ServiceCatalog, ServiceDescriptor};

use super::ApiError;

/// App State holding the shared, read-only catalog
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ServiceCatalog>,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    /// Current time in epoch milliseconds
    pub ts: i64,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    debug!("[API] Health check");
    Json(HealthResponse {
        ok: true,
        ts: Utc::now().timestamp_millis(),
    })
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub name: &'static str,
    pub version: &'static str,
}

/// Identity endpoint
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        name: branding::API_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Catalog listing response
#[derive(Serialize)]
pub struct ServicesResponse {
    pub services: Vec<ServiceDescriptor>,
}

/// Full catalog listing, stable insertion order
pub async fn list_services(State(state): State<AppState>) -> Json<ServicesResponse> {
    debug!("[API] Listing {} services", state.catalog.len());
    Json(ServicesResponse {
        services: state.catalog.list_all().to_vec(),
    })
}

/// Single-service lookup response: the descriptor plus the derived demo field
#[derive(Serialize)]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub descriptor: ServiceDescriptor,
    pub demo: String,
}

/// Derive the demo payload for a descriptor
///
/// Pure projection computed per request; never stored on the catalog entry.
fn demo_payload(descriptor: &ServiceDescriptor) -> String {
    format!(
        "This is a placeholder demo payload for {}.",
        descriptor.name
    )
}

/// Single-service lookup by slug (exact, case-sensitive)
pub async fn get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ServiceDetail>, ApiError> {
    let Some(descriptor) = state.catalog.find_by_slug(&slug) else {
        debug!("[API] Service lookup miss: {}", slug);
        return Err(ApiError::NotFound);
    };

    debug!("[API] Service lookup: {}", slug);
    Ok(Json(ServiceDetail {
        demo: demo_payload(descriptor),
        descriptor: descriptor.clone(),
    }))
}
