use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{seed_projects, serialize_doc, Project};
use crate::state::AppState;

// ============ Response DTOs ============

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub repo: Option<String>,
    pub thumbnail: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            tags: p.tags,
            link: p.link,
            repo: p.repo,
            thumbnail: p.thumbnail,
        }
    }
}

// ============ Handlers ============

/// List all projects, seeding the fixed defaults on first call
#[utoipa::path(
    get,
    path = "/projects",
    responses(
        (status = 200, description = "List of projects", body = [ProjectResponse]),
        (status = 500, description = "Storage failure")
    ),
    tag = "Projects"
)]
pub async fn list_projects(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectResponse>>> {
    let mut docs = state.store.get_documents(Project::COLLECTION).await?;

    if docs.is_empty() {
        let seeds = seed_projects()
            .iter()
            .map(|p| p.to_document())
            .collect::<AppResult<Vec<_>>>()?;

        if state.store.seed_if_empty(Project::COLLECTION, seeds).await? {
            tracing::info!("Seeded default projects");
        }
        docs = state.store.get_documents(Project::COLLECTION).await?;
    }

    let mut projects = Vec::with_capacity(docs.len());
    for doc in &docs {
        let project: Project = bson::from_document(serialize_doc(doc))
            .map_err(|e| AppError::Internal(format!("stored project is malformed: {e}")))?;
        project
            .validate()
            .map_err(|e| AppError::Internal(format!("stored project is malformed: {e}")))?;
        projects.push(project.into());
    }

    Ok(Json(projects))
}
