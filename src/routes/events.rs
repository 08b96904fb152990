//! Event routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{validation_message, AppError};
use crate::middleware::rbac::RequireManager;
use crate::models::event::{CreateEvent, Event, UpdateEvent};
use crate::models::pagination::{PageEnvelope, PageQuery};
use crate::routes::MessageResponse;
use crate::services::events as event_service;
use crate::AppState;

/// GET /api/events — ordered by event date, most recent first.
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<PageEnvelope<Event>>, AppError> {
    let result = event_service::list(&state.db, &page).await?;
    Ok(Json(result))
}

/// POST /api/events (manager+).
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Json(body): Json<CreateEvent>,
) -> Result<Json<Event>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let event = event_service::create(&state.db, &body).await?;
    Ok(Json(event))
}

/// GET /api/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, AppError> {
    let event = event_service::find_by_id(&state.db, id).await?;
    Ok(Json(event))
}

/// PUT /api/events/{id} (manager+).
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateEvent>,
) -> Result<Json<Event>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let event = event_service::update(&state.db, id, &body).await?;
    Ok(Json(event))
}

/// DELETE /api/events/{id} (manager+).
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    event_service::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Event removed")))
}
