//! Settings service: the singleton profile row and the role it carries.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::permissions::Role;
use crate::models::settings::{SettingsProfile, SettingsRow, UpdateSettings};

/// Fetch the profile, serving the bootstrap defaults when no row exists yet.
pub async fn get(pool: &PgPool) -> Result<SettingsProfile, AppError> {
    let row = sqlx::query_as::<_, SettingsRow>("SELECT * FROM settings LIMIT 1")
        .fetch_optional(pool)
        .await?;

    Ok(row.map(SettingsProfile::from).unwrap_or_default())
}

/// The role driving capability resolution. Defaults to admin, matching the
/// profile defaults served before the first save.
pub async fn current_role(pool: &PgPool) -> Result<Role, AppError> {
    let role: Option<Role> = sqlx::query_scalar("SELECT user_role FROM settings LIMIT 1")
        .fetch_optional(pool)
        .await?;
    Ok(role.unwrap_or(Role::Admin))
}

/// Upsert the singleton profile row.
pub async fn update(pool: &PgPool, input: &UpdateSettings) -> Result<SettingsProfile, AppError> {
    let existing = sqlx::query_as::<_, SettingsRow>("SELECT * FROM settings LIMIT 1")
        .fetch_optional(pool)
        .await?;

    let row = match existing {
        Some(current) => {
            sqlx::query_as::<_, SettingsRow>(
                r#"
                UPDATE settings SET
                    name = $2,
                    email = $3,
                    notifications = COALESCE($4, notifications),
                    user_role = COALESCE($5, user_role),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(current.id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.notifications)
            .bind(input.user_role)
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, SettingsRow>(
                r#"
                INSERT INTO settings (name, email, notifications, user_role)
                VALUES ($1, $2, COALESCE($3, true), COALESCE($4, 'admin'))
                RETURNING *
                "#,
            )
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.notifications)
            .bind(input.user_role)
            .fetch_one(pool)
            .await?
        }
    };

    Ok(SettingsProfile::from(row))
}
