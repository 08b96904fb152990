//! Notification service: feed listing and read-state transitions.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::notification::{CreateNotification, Notification};
use crate::models::pagination::{PageEnvelope, PageQuery};

const DEFAULT_COLOR: &str = "bg-indigo-500";

/// List notifications, newest first.
pub async fn list(pool: &PgPool, page: &PageQuery) -> Result<PageEnvelope<Notification>, AppError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notifications")
        .fetch_one(pool)
        .await?;

    let items = sqlx::query_as::<_, Notification>(
        "SELECT * FROM notifications ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(PageEnvelope::from_query(items, total, page))
}

/// Create a notification.
pub async fn create(pool: &PgPool, input: &CreateNotification) -> Result<Notification, AppError> {
    let notification = sqlx::query_as::<_, Notification>(
        r#"
        INSERT INTO notifications (text, type, color)
        VALUES ($1, $2, COALESCE($3, $4))
        RETURNING *
        "#,
    )
    .bind(&input.text)
    .bind(input.kind)
    .bind(&input.color)
    .bind(DEFAULT_COLOR)
    .fetch_one(pool)
    .await?;

    Ok(notification)
}

/// Mark one notification as read.
pub async fn mark_read(pool: &PgPool, id: Uuid) -> Result<Notification, AppError> {
    sqlx::query_as::<_, Notification>(
        "UPDATE notifications SET is_read = true WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
}

/// Mark every notification as read, returning how many changed.
pub async fn mark_all_read(pool: &PgPool) -> Result<u64, AppError> {
    let result = sqlx::query("UPDATE notifications SET is_read = true WHERE is_read = false")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
