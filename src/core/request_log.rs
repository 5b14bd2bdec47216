use crate::utils::time::local_timestamp;
use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Log method, URI and local time of every request reaching the API routes
pub async fn log_request(request: Request, next: Next) -> Response {
    info!(
        method = %request.method(),
        uri = %request.uri(),
        timestamp = %local_timestamp(),
        "Request received"
    );

    next.run(request).await
}
