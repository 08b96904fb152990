//! Settings and permission routes.

use axum::{extract::State, Json};
use validator::Validate;

use crate::errors::{validation_message, AppError};
use crate::middleware::auth::CurrentAdmin;
use crate::middleware::rbac::RequireManager;
use crate::models::permissions::{Capabilities, Role};
use crate::models::settings::{SettingsProfile, UpdateSettings};
use crate::services::auth as auth_service;
use crate::services::settings as settings_service;
use crate::AppState;

/// GET /api/settings — serves defaults until the first save.
pub async fn get(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
) -> Result<Json<SettingsProfile>, AppError> {
    let profile = settings_service::get(&state.db).await?;
    Ok(Json(profile))
}

/// POST /api/settings — upsert the profile (manager+); changing the role
/// requires the admin role.
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Json(body): Json<UpdateSettings>,
) -> Result<Json<SettingsProfile>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;

    if body.user_role.is_some() {
        let role = settings_service::current_role(&state.db).await?;
        if !Capabilities::resolve(role, false).can_change_roles {
            return Err(AppError::Forbidden(
                "Only an admin can change roles".to_string(),
            ));
        }
    }

    let profile = settings_service::update(&state.db, &body).await?;
    Ok(Json(profile))
}

/// GET /api/permissions — resolved capability set for the current admin,
/// recomputed per request for UI gating.
pub async fn permissions(
    State(state): State<AppState>,
    current_admin: CurrentAdmin,
) -> Result<Json<Capabilities>, AppError> {
    let role: Role = settings_service::current_role(&state.db).await?;
    let admin = auth_service::find_by_id(&state.db, current_admin.id).await?;
    Ok(Json(Capabilities::resolve(role, admin.is_primary)))
}
