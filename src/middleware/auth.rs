//! JWT authentication extractor for Axum handlers.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::auth as auth_service;
use crate::AppState;

/// Authenticated admin extracted from a JWT Bearer token.
///
/// Use as an Axum extractor in handlers that require authentication:
/// ```ignore
/// async fn handler(current_admin: CurrentAdmin) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    pub id: Uuid,
    pub email: String,
}

impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let claims = auth_service::validate_token(token, &state.config.jwt_secret)?;

        if claims.token_type != "access" {
            return Err(AppError::Unauthorized);
        }

        let admin_id: Uuid = claims.admin_id.parse().map_err(|_| AppError::Unauthorized)?;

        Ok(CurrentAdmin {
            id: admin_id,
            email: claims.sub,
        })
    }
}
