use crate::models::response::WelcomeResponse;
use axum::{response::IntoResponse, Json};

pub const WELCOME_MESSAGE: &str = "Minha primeira API está rodando!";
pub const AUTHOR: &str = "Derick Rufino";

/// Service banner
///
/// GET /
pub async fn welcome_handler() -> impl IntoResponse {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
        version: env!("CARGO_PKG_VERSION"),
        author: AUTHOR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_welcome_handler() {
        let response = welcome_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "Minha primeira API está rodando!",
                "version": "1.0.0",
                "author": "Derick Rufino",
            })
        );
    }
}
