use bson::Document;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// A validated contact-form message ready for storage.
/// Collection name: "message"
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub const COLLECTION: &'static str = "message";

    pub fn to_document(&self) -> AppResult<Document> {
        bson::to_document(self).map_err(|e| AppError::Internal(e.to_string()))
    }
}
