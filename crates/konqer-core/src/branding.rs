//! Centralized branding constants
//!
//! All product naming comes from this module. Every service in the catalog
//! is reachable under its own subdomain of the production domain.

/// Machine name reported by the API's `/version` endpoint
pub const API_NAME: &str = "konqer-api";

/// Human-facing product name
pub const DISPLAY_NAME: &str = "Konqer";

/// Production apex domain
pub const DOMAIN: &str = "konqer.app";

/// Production API domain
pub const API_DOMAIN: &str = "api.konqer.app";

/// Default bind address for the catalog API
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Default TCP port for the catalog API
pub const DEFAULT_API_PORT: u16 = 4000;

/// Get the production URL for a service, derived from its slug
///
/// # Example
/// ```
/// let url = konqer_core::branding::service_url("cold-dm-personalizer");
/// assert_eq!(url, "https://cold-dm-personalizer.konqer.app");
/// ```
pub fn service_url(slug: &str) -> String {
    format!("https://{}.{}", slug, DOMAIN)
}

/// Get the full API URL for a path
///
/// # Example
/// ```
/// let url = konqer_core::branding::api_url("/services");
/// assert_eq!(url, "https://api.konqer.app/services");
/// ```
pub fn api_url(path: &str) -> String {
    format!("https://{}/{}", API_DOMAIN, path.trim_start_matches('/'))
}
