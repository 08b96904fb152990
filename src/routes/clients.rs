//! Client routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{validation_message, AppError};
use crate::middleware::rbac::RequireManager;
use crate::models::client::{Client, CreateClient, UpdateClient};
use crate::models::pagination::{PageEnvelope, PageQuery};
use crate::routes::MessageResponse;
use crate::services::clients::{self as client_service, ClientFilters};
use crate::AppState;

/// GET /api/clients — list clients with search/status filters.
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filters): Query<ClientFilters>,
) -> Result<Json<PageEnvelope<Client>>, AppError> {
    let result = client_service::list(&state.db, &filters, &page).await?;
    Ok(Json(result))
}

/// POST /api/clients (manager+).
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Json(body): Json<CreateClient>,
) -> Result<Json<Client>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let client = client_service::create(&state.db, &body).await?;
    Ok(Json(client))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Client>, AppError> {
    let client = client_service::find_by_id(&state.db, id).await?;
    Ok(Json(client))
}

/// PUT /api/clients/{id} (manager+).
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateClient>,
) -> Result<Json<Client>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let client = client_service::update(&state.db, id, &body).await?;
    Ok(Json(client))
}

/// DELETE /api/clients/{id} (manager+).
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    client_service::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Client removed")))
}
