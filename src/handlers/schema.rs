use axum::Json;
use serde_json::{json, Value};

/// Expose record schemas for tools that introspect. Static, no side effects.
#[utoipa::path(
    get,
    path = "/schema",
    responses(
        (status = 200, description = "Field names and type labels per record kind")
    ),
    tag = "Schema"
)]
pub async fn get_schema() -> Json<Value> {
    Json(json!({
        "project": {
            "title": "String",
            "description": "String",
            "tags": "Vec<String>",
            "link": "Option<String>",
            "repo": "Option<String>",
            "thumbnail": "Option<String>",
        },
        "message": {
            "name": "String",
            "email": "Email",
            "message": "String",
        },
    }))
}
