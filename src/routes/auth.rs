//! Authentication routes: login, refresh, registration, profile.

use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;

use crate::errors::{validation_message, AppError};
use crate::middleware::auth::CurrentAdmin;
use crate::models::admin::{AdminResponse, RegisterAdmin};
use crate::routes::MessageResponse;
use crate::services::auth as auth_service;
use crate::services::auth::TokenPair;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenPair>, AppError> {
    let tokens = auth_service::login(
        &state.db,
        &body.email,
        &body.password,
        &state.config.jwt_secret,
        state.config.jwt_access_token_expiry_secs,
        state.config.jwt_refresh_token_expiry_secs,
    )
    .await?;

    Ok(Json(tokens))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> Result<Json<TokenPair>, AppError> {
    let tokens = auth_service::refresh_token(
        &state.db,
        &body.refresh_token,
        &state.config.jwt_secret,
        state.config.jwt_access_token_expiry_secs,
        state.config.jwt_refresh_token_expiry_secs,
    )
    .await?;

    Ok(Json(tokens))
}

/// POST /api/auth/register — gated by the registration toggle.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterAdmin>,
) -> Result<Json<AdminResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let admin = auth_service::register(&state.db, &body).await?;
    Ok(Json(AdminResponse::from(admin)))
}

/// POST /api/auth/logout — client-side token discard (stateless JWT)
pub async fn logout() -> Json<MessageResponse> {
    // With stateless JWT, logout is handled client-side by discarding tokens.
    Json(MessageResponse::new("Logged out successfully"))
}

/// GET /api/auth/me — current admin profile
pub async fn me(
    State(state): State<AppState>,
    current_admin: CurrentAdmin,
) -> Result<Json<AdminResponse>, AppError> {
    let admin = auth_service::find_by_id(&state.db, current_admin.id).await?;
    Ok(Json(AdminResponse::from(admin)))
}
