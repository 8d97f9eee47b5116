//! Router

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    handlers::{chat_handler, health_check},
    state::AppState,
};

/// API routes, with every other path served from the static directory.
///
/// Unknown paths get `index.html` so client-side routes such as
/// `/secure/chat` survive a page reload.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let frontend = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/chat", post(chat_handler))
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
