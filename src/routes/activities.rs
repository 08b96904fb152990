//! Activity log routes.

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::errors::{validation_message, AppError};
use crate::middleware::auth::CurrentAdmin;
use crate::models::activity::{ActivityLog, CreateActivity};
use crate::models::pagination::{PageEnvelope, PageQuery};
use crate::services::activities as activity_service;
use crate::AppState;

/// GET /api/activities
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<PageEnvelope<ActivityLog>>, AppError> {
    let result = activity_service::list(&state.db, &page).await?;
    Ok(Json(result))
}

/// POST /api/activities
pub async fn create(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    Json(body): Json<CreateActivity>,
) -> Result<Json<ActivityLog>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let entry = activity_service::create(&state.db, &body).await?;
    Ok(Json(entry))
}
