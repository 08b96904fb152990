//! Admin account routes: profile updates and the registration toggle.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{validation_message, AppError};
use crate::middleware::auth::CurrentAdmin;
use crate::middleware::rbac::RequirePrimary;
use crate::models::admin::AdminResponse;
use crate::routes::MessageResponse;
use crate::services::account as account_service;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNameRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEmailRequest {
    #[validate(email(message = "must be a valid email"))]
    pub new_email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub current_password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub current_password: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRegistrationResponse {
    pub allow_registration: bool,
    pub message: String,
}

/// POST /api/admin/update-name
pub async fn update_name(
    State(state): State<AppState>,
    current_admin: CurrentAdmin,
    Json(body): Json<UpdateNameRequest>,
) -> Result<Json<AdminResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let admin = account_service::update_name(&state.db, current_admin.id, &body.name).await?;
    Ok(Json(AdminResponse::from(admin)))
}

/// POST /api/admin/change-email
pub async fn change_email(
    State(state): State<AppState>,
    current_admin: CurrentAdmin,
    Json(body): Json<ChangeEmailRequest>,
) -> Result<Json<AdminResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let admin = account_service::change_email(
        &state.db,
        current_admin.id,
        &body.new_email,
        &body.current_password,
    )
    .await?;
    Ok(Json(AdminResponse::from(admin)))
}

/// POST /api/admin/change-password
pub async fn change_password(
    State(state): State<AppState>,
    current_admin: CurrentAdmin,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    if body.new_password != body.confirm_password {
        return Err(AppError::Validation(
            "New passwords do not match".to_string(),
        ));
    }
    account_service::change_password(
        &state.db,
        current_admin.id,
        &body.current_password,
        &body.new_password,
    )
    .await?;
    Ok(Json(MessageResponse::new("Password changed successfully")))
}

/// POST /api/admin/toggle-registration — primary admin only.
pub async fn toggle_registration(
    State(state): State<AppState>,
    RequirePrimary(admin): RequirePrimary,
) -> Result<Json<ToggleRegistrationResponse>, AppError> {
    let updated = account_service::toggle_registration(&state.db, admin.id).await?;
    let message = if updated.allow_registration {
        "Registration enabled"
    } else {
        "Registration disabled"
    };
    Ok(Json(ToggleRegistrationResponse {
        allow_registration: updated.allow_registration,
        message: message.to_string(),
    }))
}
