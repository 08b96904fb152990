//! Role-based access control extractors for Axum handlers.
//!
//! The capability table lives in [`crate::models::permissions`]; these
//! extractors re-resolve it per request from the stored role, so what the
//! UI shows and what the server enforces cannot drift apart.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::middleware::auth::CurrentAdmin;
use crate::models::permissions::{Capabilities, Role};
use crate::services::settings as settings_service;
use crate::AppState;

/// Extractor that requires manager-tier capabilities (manager or admin role).
#[derive(Debug, Clone)]
pub struct RequireManager(pub CurrentAdmin);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = CurrentAdmin::from_request_parts(parts, state).await?;
        let role = settings_service::current_role(&state.db).await?;
        if !Capabilities::resolve(role, false).can_edit_members {
            return Err(AppError::Forbidden(
                "Manager or admin access required".to_string(),
            ));
        }
        Ok(RequireManager(admin))
    }
}

/// Extractor that requires the admin role.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub CurrentAdmin);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = CurrentAdmin::from_request_parts(parts, state).await?;
        let role = settings_service::current_role(&state.db).await?;
        if role != Role::Admin {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }
        Ok(RequireAdmin(admin))
    }
}

/// Extractor that requires the distinguished primary admin.
#[derive(Debug, Clone)]
pub struct RequirePrimary(pub CurrentAdmin);

impl FromRequestParts<AppState> for RequirePrimary {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = CurrentAdmin::from_request_parts(parts, state).await?;
        let record = crate::services::auth::find_by_id(&state.db, admin.id).await?;
        if !record.is_primary {
            return Err(AppError::Forbidden(
                "Only the primary admin can perform this action".to_string(),
            ));
        }
        Ok(RequirePrimary(admin))
    }
}
