//! HTTP API server

use axum::{routing::get, Router};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/articles", get(handlers::list_articles))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Router with permissive cross-origin handling
pub fn create_router_with_cors(state: AppState) -> Router {
    create_router(state).layer(cors_layer())
}

/// Any origin, any method, any header, with credentials.
///
/// Wildcards cannot be combined with credentials, so the request's own
/// origin, method and headers are echoed back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
