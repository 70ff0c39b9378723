use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{Created, DataResponse, NoContent, Paginated, PaginationParams};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::{CreateProjectRequest, Project, UpdateProjectRequest};
use crate::error::{ApiError, ApiResult};

/// Create a new project
pub async fn create_project(
    auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<Created<DataResponse<Project>>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::BadRequest("project name must not be empty".to_string()));
    }

    let project = Project::new(auth.user_id, req);

    tracing::info!(
        user_id = %auth.user_id,
        project_id = %project.id,
        project_name = %project.name,
        "Creating project"
    );

    state.projects.save(project.clone());

    Ok(Created(DataResponse::new(project)))
}

/// List projects, newest first
pub async fn list_projects(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationParams>,
) -> Paginated<Project> {
    Paginated::slice(state.projects.list(), &pagination)
}

/// Get a specific project by ID
pub async fn get_project(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<DataResponse<Project>> {
    state
        .projects
        .get(project_id)
        .map(DataResponse::new)
        .ok_or_else(|| ApiError::NotFound(format!("Project {project_id} not found")))
}

/// Apply a partial update to a project
pub async fn update_project(
    auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<DataResponse<Project>> {
    let mut project = state
        .projects
        .get(project_id)
        .ok_or_else(|| ApiError::NotFound(format!("Project {project_id} not found")))?;

    project.apply(req);
    state.projects.save(project.clone());

    tracing::info!(
        user_id = %auth.user_id,
        project_id = %project_id,
        "Project updated"
    );

    Ok(DataResponse::new(project))
}

/// Delete a project
pub async fn delete_project(
    auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    if !state.projects.delete(project_id) {
        return Err(ApiError::NotFound(format!("Project {project_id} not found")));
    }

    tracing::info!(user_id = %auth.user_id, project_id = %project_id, "Project deleted");

    Ok(NoContent)
}
