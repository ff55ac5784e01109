// Library crate for the Portfolio API
// Exports modules for use by the server binary and tests

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{get_schema, list_projects, read_root, submit_message, test_database};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    // Wildcard CORS for the public portfolio frontend. Credentials cannot
    // be combined with wildcard origins, so they stay off.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(read_root))
        .route("/test", get(test_database))
        .route("/projects", get(list_projects))
        .route("/contact", post(submit_message))
        .route("/schema", get(get_schema))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
