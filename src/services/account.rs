//! Admin account management: profile updates and the registration toggle.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::admin::Admin;
use crate::services::auth::{hash_password, verify_password};

/// Update the admin's display name.
pub async fn update_name(pool: &PgPool, admin_id: Uuid, name: &str) -> Result<Admin, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    sqlx::query_as::<_, Admin>(
        "UPDATE admins SET name = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(admin_id)
    .bind(trimmed)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))
}

/// Change the admin's email after re-verifying the current password.
pub async fn change_email(
    pool: &PgPool,
    admin_id: Uuid,
    new_email: &str,
    current_password: &str,
) -> Result<Admin, AppError> {
    let admin = super::auth::find_by_id(pool, admin_id).await?;

    if !verify_password(current_password, &admin.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let taken: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1 AND id <> $2)",
    )
    .bind(new_email)
    .bind(admin_id)
    .fetch_one(pool)
    .await?;

    if taken {
        return Err(AppError::Conflict("Email is already in use".to_string()));
    }

    let updated = sqlx::query_as::<_, Admin>(
        "UPDATE admins SET email = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(admin_id)
    .bind(new_email)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}

/// Change the admin's password after re-verifying the current one.
pub async fn change_password(
    pool: &PgPool,
    admin_id: Uuid,
    current_password: &str,
    new_password: &str,
) -> Result<(), AppError> {
    let admin = super::auth::find_by_id(pool, admin_id).await?;

    if !verify_password(current_password, &admin.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let new_hash = hash_password(new_password)?;
    sqlx::query("UPDATE admins SET password_hash = $2, updated_at = NOW() WHERE id = $1")
        .bind(admin_id)
        .bind(&new_hash)
        .execute(pool)
        .await?;

    Ok(())
}

/// Flip the registration toggle. Only the primary admin may do this; the
/// caller's row is re-read so the check cannot rely on stale token data.
pub async fn toggle_registration(pool: &PgPool, admin_id: Uuid) -> Result<Admin, AppError> {
    let admin = super::auth::find_by_id(pool, admin_id).await?;

    if !admin.is_primary {
        return Err(AppError::Forbidden(
            "Only the primary admin can change registration settings".to_string(),
        ));
    }

    let updated = sqlx::query_as::<_, Admin>(
        "UPDATE admins SET allow_registration = NOT allow_registration, updated_at = NOW() \
         WHERE id = $1 RETURNING *",
    )
    .bind(admin_id)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}
