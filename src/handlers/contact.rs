use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppResult;
use crate::models::ContactMessage;
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(
        min = 5,
        max = 2000,
        message = "Message must be between 5 and 2000 characters"
    ))]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub status: String,
    pub id: String,
}

// ============ Handlers ============

/// Store a contact message
#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored", body = ContactResponse),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Contact"
)]
pub async fn submit_message(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> AppResult<Json<ContactResponse>> {
    payload.validate()?;

    let message = ContactMessage {
        name: payload.name,
        email: payload.email,
        message: payload.message,
    };

    let id = state
        .store
        .create_document(ContactMessage::COLLECTION, message.to_document()?)
        .await?;

    Ok(Json(ContactResponse {
        status: "ok".to_string(),
        id,
    }))
}
