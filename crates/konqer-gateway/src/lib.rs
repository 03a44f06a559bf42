//! # Konqer Catalog API
//!
//! HTTP surface for the service catalog: listing, single-service lookup,
//! liveness and identity endpoints. The catalog itself lives in
//! `konqer-core`; this crate owns transport concerns only.

pub mod server;

pub use server::{ApiConfig, ApiError, ApiServer, AppState};
