//! Team member routes: filtered listing and CRUD.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{validation_message, AppError};
use crate::middleware::rbac::{RequireAdmin, RequireManager};
use crate::models::member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use crate::models::pagination::{PageEnvelope, PageQuery};
use crate::routes::MessageResponse;
use crate::services::team::{self as team_service, TeamFilters};
use crate::AppState;

/// GET /api/team — list team members with search/status filters.
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filters): Query<TeamFilters>,
) -> Result<Json<PageEnvelope<TeamMember>>, AppError> {
    let result = team_service::list(&state.db, &filters, &page).await?;
    Ok(Json(result))
}

/// POST /api/team — add a team member (manager+).
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Json(body): Json<CreateTeamMember>,
) -> Result<Json<TeamMember>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let member = team_service::create(&state.db, &body).await?;
    Ok(Json(member))
}

/// GET /api/team/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamMember>, AppError> {
    let member = team_service::find_by_id(&state.db, id).await?;
    Ok(Json(member))
}

/// PUT /api/team/{id} — update a team member (manager+).
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTeamMember>,
) -> Result<Json<TeamMember>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let member = team_service::update(&state.db, id, &body).await?;
    Ok(Json(member))
}

/// DELETE /api/team/{id} — remove a team member (admin role).
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    team_service::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Team member removed")))
}
