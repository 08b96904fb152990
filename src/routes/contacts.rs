//! Contact submission routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::middleware::rbac::RequireManager;
use crate::models::contact::{ContactSubmission, UpdateContactStatus};
use crate::models::pagination::{PageEnvelope, PageQuery};
use crate::routes::MessageResponse;
use crate::services::contacts::{self as contact_service, ContactFilters};
use crate::AppState;

/// GET /api/contacts — list submissions; `status=all` or absent lists
/// everything.
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filters): Query<ContactFilters>,
) -> Result<Json<PageEnvelope<ContactSubmission>>, AppError> {
    let result = contact_service::list(&state.db, &filters, &page).await?;
    Ok(Json(result))
}

/// PATCH /api/contacts/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateContactStatus>,
) -> Result<Json<ContactSubmission>, AppError> {
    let submission = contact_service::update_status(&state.db, id, body.status).await?;
    Ok(Json(submission))
}

/// DELETE /api/contacts/{id} (manager+).
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    contact_service::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Contact submission removed")))
}
