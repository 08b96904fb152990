//! Project routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{validation_message, AppError};
use crate::middleware::rbac::RequireManager;
use crate::models::pagination::{PageEnvelope, PageQuery};
use crate::models::project::{CreateProject, Project, ProjectWithClient, UpdateProject};
use crate::routes::MessageResponse;
use crate::services::projects::{self as project_service, ProjectFilters};
use crate::AppState;

/// GET /api/projects — client-join listing with `meta.stats` aggregate.
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filters): Query<ProjectFilters>,
) -> Result<Json<PageEnvelope<ProjectWithClient>>, AppError> {
    let result = project_service::list(&state.db, &filters, &page).await?;
    Ok(Json(result))
}

/// POST /api/projects (manager+).
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Json(body): Json<CreateProject>,
) -> Result<Json<Project>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let project = project_service::create(&state.db, &body).await?;
    Ok(Json(project))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, AppError> {
    let project = project_service::find_by_id(&state.db, id).await?;
    Ok(Json(project))
}

/// PUT /api/projects/{id} (manager+).
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProject>,
) -> Result<Json<Project>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let project = project_service::update(&state.db, id, &body).await?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id} (manager+).
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    project_service::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Project removed")))
}
