use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

/// Plain-text 404 for anything no route or static file answered
pub async fn fallback_handler(method: Method, uri: Uri) -> Response {
    debug!(%method, path = uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        format!("Cannot {} {}", method, uri.path()),
    )
        .into_response()
}
