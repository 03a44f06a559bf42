//! HTTP Request/Response Logging Middleware
//!
//! One compact line per request with method, path, status and latency.
//! No body capture: nothing on this surface carries a sensitive payload,
//! and every response is small structured JSON.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, warn};

/// Log every request at DEBUG, elevating 5xx responses to WARN
pub async fn http_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        warn!("[API] {} {} -> {} ({}ms)", method, path, status, elapsed_ms);
    } else {
        debug!("[API] {} {} -> {} ({}ms)", method, path, status, elapsed_ms);
    }

    response
}
