//! Notification routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::errors::{validation_message, AppError};
use crate::middleware::auth::CurrentAdmin;
use crate::models::notification::{CreateNotification, Notification};
use crate::models::pagination::{PageEnvelope, PageQuery};
use crate::services::notifications as notification_service;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ReadAllResponse {
    pub updated: u64,
}

/// GET /api/notifications
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<PageEnvelope<Notification>>, AppError> {
    let result = notification_service::list(&state.db, &page).await?;
    Ok(Json(result))
}

/// POST /api/notifications
pub async fn create(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    Json(body): Json<CreateNotification>,
) -> Result<Json<Notification>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let notification = notification_service::create(&state.db, &body).await?;
    Ok(Json(notification))
}

/// PATCH /api/notifications/{id} — mark as read.
pub async fn mark_read(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, AppError> {
    let notification = notification_service::mark_read(&state.db, id).await?;
    Ok(Json(notification))
}

/// POST /api/notifications/read-all
pub async fn read_all(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
) -> Result<Json<ReadAllResponse>, AppError> {
    let updated = notification_service::mark_all_read(&state.db).await?;
    Ok(Json(ReadAllResponse { updated }))
}
