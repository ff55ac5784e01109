use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

// ============ Response DTOs ============

#[derive(Debug, Serialize, ToSchema)]
pub struct LivenessResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

// ============ Handlers ============

/// Static liveness check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is running", body = LivenessResponse)
    ),
    tag = "Health"
)]
pub async fn read_root() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Portfolio API is running".to_string(),
    })
}

/// Database diagnostics. Never fails: every storage error is caught and
/// rendered as a status string instead.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Diagnostic report", body = DiagnosticsResponse)
    ),
    tag = "Health"
)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: if state.config.database_url.is_some() {
            "✅ Set".to_string()
        } else {
            "❌ Not Set".to_string()
        },
        database_name: state.config.database_name.clone(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match state.store.ping().await {
        Ok(()) => {
            response.database = format!("✅ Available ({})", state.store.backend_name());
            response.connection_status = "Connected".to_string();

            match state.store.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(10);
                    response.collections = names;
                    response.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    response.database =
                        format!("⚠️ Connected but Error: {}", truncate(&e.to_string(), 50));
                }
            }
        }
        Err(e) => {
            response.database = format!("❌ Error: {}", truncate(&e.to_string(), 50));
        }
    }

    Json(response)
}

fn truncate(msg: &str, limit: usize) -> String {
    msg.chars().take(limit).collect()
}
