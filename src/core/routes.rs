// HTTP routes configuration

use crate::core::request_log::log_request;
use crate::core::state::AppState;
use crate::handlers::{fallback, root, users};
use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::services::ServeDir;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/", get(root::welcome_handler))
        .route(
            "/usuarios",
            get(users::list_users_handler).post(users::create_user_handler),
        )
        .route(
            "/usuarios/{id}",
            get(users::get_user_handler).delete(users::delete_user_handler),
        )
        // 404 for unmatched paths and for known paths with another method
        .fallback(fallback::fallback_handler)
        .method_not_allowed_fallback(fallback::fallback_handler)
        .layer(middleware::from_fn(log_request))
        .with_state(Arc::clone(&state));

    // Trailing slashes are trimmed before matching: `/usuarios/` is `/usuarios`.
    // Static lookups still see the raw path.
    let api = Router::new()
        .fallback_service(NormalizePathLayer::trim_trailing_slash().layer(api));

    // Static files are looked up first; misses fall through to the API
    let app = match &state.config.server.static_dir {
        Some(dir) => Router::new().fallback_service(
            ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .fallback(api),
        ),
        None => api,
    };

    app.layer(cors_layer())
}

/// Any origin; OPTIONS requests are answered here with an empty 200
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}
