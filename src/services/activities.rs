//! Activity log service.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::activity::{ActivityLog, CreateActivity};
use crate::models::pagination::{PageEnvelope, PageQuery};

/// List activity log entries, newest first.
pub async fn list(pool: &PgPool, page: &PageQuery) -> Result<PageEnvelope<ActivityLog>, AppError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activity_logs")
        .fetch_one(pool)
        .await?;

    let items = sqlx::query_as::<_, ActivityLog>(
        "SELECT * FROM activity_logs ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(PageEnvelope::from_query(items, total, page))
}

/// Append an entry to the activity log.
pub async fn create(pool: &PgPool, input: &CreateActivity) -> Result<ActivityLog, AppError> {
    let entry = sqlx::query_as::<_, ActivityLog>(
        "INSERT INTO activity_logs (text, type) VALUES ($1, $2) RETURNING *",
    )
    .bind(&input.text)
    .bind(input.kind)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}
