use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Route template for the request, without the ids in the path.
fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_string(), |p| p.as_str().to_string())
}

/// Logs one `api_request` event per request with the route template,
/// status and latency. Server errors log at warn.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = route_label(&req);
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            elapsed_ms,
            "api_request"
        );
    } else {
        tracing::info!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            elapsed_ms,
            "api_request"
        );
    }

    response
}
