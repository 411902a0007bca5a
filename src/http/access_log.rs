//! Per-request access logging.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Logs method, path, status, and latency once the response is ready.
pub(super) async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        target: "taskbench::access",
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed = ?started.elapsed(),
        "request completed"
    );
    response
}
