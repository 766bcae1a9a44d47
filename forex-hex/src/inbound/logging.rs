//! Access log middleware.

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Logs status, method, path and latency once the response is ready.
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        status = response.status().as_u16(),
        %method,
        %path,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "Request completed"
    );

    response
}
