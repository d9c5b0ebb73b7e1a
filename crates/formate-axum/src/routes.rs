//! Route definitions and router construction.
//!
//! - `GET /health`
//! - `GET|POST /graphql`
//! - `{api_base}/openai-chat/{chat, chat/stream, models}`

use axum::Router;
use axum::http::{HeaderValue, Method, Uri, header};
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AppContext, CorsConfig, ServerConfig};
use crate::error::HttpError;
use crate::graphql;
use crate::handlers;
use crate::state::AppState;

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
];

/// Build CORS layer from configuration.
///
/// Credentials are only allowed with an explicit origin list; browsers
/// reject them combined with a wildcard origin.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(ALLOWED_METHODS)
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
                .allow_credentials(true)
        }
    }
}

/// Chat relay routes, relative to the `openai-chat` mount point.
pub(crate) fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/chat/stream", post(handlers::chat::chat_stream))
        .route("/models", get(handlers::chat::models))
}

/// Create the main Axum router.
pub fn create_router(ctx: AppContext, config: &ServerConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(&config.cors);
    let chat_base = format!("{}/openai-chat", config.api_base());

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/graphql",
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        .nest(&chat_base, chat_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(uri: Uri) -> HttpError {
    HttpError::NotFound(format!("No route for {uri}"))
}
