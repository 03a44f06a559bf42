//! Shared test utilities and fixtures for Konqer catalog API integration tests.

pub use konqer_core::{ServiceCatalog, ServiceDescriptor, ServiceKind};

/// Catalog fixtures
pub mod fixtures {
    use konqer_core::{ServiceCatalog, ServiceDescriptor, ServiceKind};

    pub fn descriptor(slug: &str, name: &str, kind: ServiceKind) -> ServiceDescriptor {
        ServiceDescriptor {
            slug: slug.to_string(),
            name: name.to_string(),
            kind,
        }
    }

    /// A small catalog with one service per category pillar
    pub fn test_catalog() -> ServiceCatalog {
        ServiceCatalog::new(vec![
            descriptor("alpha-outreach", "Alpha Outreach", ServiceKind::Outbound),
            descriptor("beta-briefs", "Beta Briefs", ServiceKind::Enablement),
            descriptor("gamma-posts", "Gamma Posts", ServiceKind::Content),
        ])
        .expect("fixture slugs are unique")
    }
}

/// Router-level HTTP helpers
pub mod http {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Drive one GET request through the router and decode the JSON body
    pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).expect("body is JSON");
        (status, json)
    }
}

/// Build a router around an injected catalog with default config
pub fn test_router(catalog: konqer_core::ServiceCatalog) -> axum::Router {
    konqer_gateway::ApiServer::new(konqer_gateway::ApiConfig::default(), catalog).router()
}
