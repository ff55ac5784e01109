use bson::Document;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// A portfolio project as read back from the store.
/// Collection name: "project"
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Project {
    pub id: String,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Project {
    pub const COLLECTION: &'static str = "project";
}

/// A project before the store has assigned it an identity
#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl NewProject {
    pub fn to_document(&self) -> AppResult<Document> {
        bson::to_document(self).map_err(|e| AppError::Internal(e.to_string()))
    }
}

/// The fixed projects inserted the first time the collection is seen empty
pub fn seed_projects() -> Vec<NewProject> {
    let project = |title: &str, description: &str, tags: &[&str]| NewProject {
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        link: Some("#".to_string()),
        repo: Some("#".to_string()),
        thumbnail: None,
    };

    vec![
        project(
            "Interactive 3D Landing",
            "Playful WebGL landing with Spline and smooth transitions.",
            &["React", "Spline", "Framer Motion"],
        ),
        project(
            "Realtime Chat App",
            "Live chat with presence, emojis, and reactions.",
            &["FastAPI", "WebSockets", "MongoDB"],
        ),
        project(
            "Portfolio CMS",
            "Markdown-powered personal site with SEO.",
            &["React", "FastAPI", "Tailwind"],
        ),
    ]
}
