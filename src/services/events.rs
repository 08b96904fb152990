//! Event service.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::event::{CreateEvent, Event, UpdateEvent};
use crate::models::pagination::{PageEnvelope, PageQuery};

/// List events ordered by event date, most recent first.
pub async fn list(pool: &PgPool, page: &PageQuery) -> Result<PageEnvelope<Event>, AppError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
        .fetch_one(pool)
        .await?;

    let items = sqlx::query_as::<_, Event>(
        "SELECT * FROM events ORDER BY event_date DESC LIMIT $1 OFFSET $2",
    )
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(PageEnvelope::from_query(items, total, page))
}

/// Create an event.
pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, AppError> {
    let event = sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (title, description, location, event_date)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.location)
    .bind(input.event_date)
    .fetch_one(pool)
    .await?;

    Ok(event)
}

/// Find an event by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Event, AppError> {
    sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
}

/// Update an event by ID.
pub async fn update(pool: &PgPool, id: Uuid, input: &UpdateEvent) -> Result<Event, AppError> {
    let existing = find_by_id(pool, id).await?;

    let event = sqlx::query_as::<_, Event>(
        r#"
        UPDATE events SET
            title = COALESCE($2, title),
            description = COALESCE($3, description),
            location = COALESCE($4, location),
            event_date = COALESCE($5, event_date)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(existing.id)
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.location)
    .bind(input.event_date)
    .fetch_one(pool)
    .await?;

    Ok(event)
}

/// Delete an event by ID.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Event not found".to_string()));
    }
    Ok(())
}
