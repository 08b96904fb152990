//! Client service: filtered, paginated listing and CRUD.

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::client::{Client, ClientStatus, CreateClient, UpdateClient};
use crate::models::filter::FilterSet;
use crate::models::pagination::{PageEnvelope, PageQuery};

const SEARCH_COLUMNS: &[&str] = &["name", "email"];

/// Filters for listing clients.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClientFilters {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl ClientFilters {
    fn to_filter_set(&self) -> FilterSet {
        let mut filter = FilterSet::new();
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            filter.search(SEARCH_COLUMNS, term);
        }
        if let Some(status) = self.status.as_deref().and_then(ClientStatus::from_query) {
            filter.eq_enum("status", "client_status", status.as_str());
        }
        filter
    }
}

/// List clients with filters and pagination, newest first.
pub async fn list(
    pool: &PgPool,
    filters: &ClientFilters,
    page: &PageQuery,
) -> Result<PageEnvelope<Client>, AppError> {
    let filter = filters.to_filter_set();
    let where_clause = filter.where_clause();

    let count_sql = format!("SELECT COUNT(*) FROM clients {where_clause}");
    let data_sql = format!(
        "SELECT * FROM clients {where_clause} ORDER BY created_at DESC LIMIT {} OFFSET {}",
        page.limit(),
        page.offset()
    );

    let total = filter.fetch_count(pool, &count_sql).await?;
    let items: Vec<Client> = filter.fetch_rows(pool, &data_sql).await?;

    Ok(PageEnvelope::from_query(items, total, page))
}

/// Create a new client.
pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, AppError> {
    sqlx::query_as::<_, Client>(
        r#"
        INSERT INTO clients (name, email, avatar, status)
        VALUES ($1, $2, $3, COALESCE($4, 'active'))
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.avatar)
    .bind(input.status)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("Client with email '{}' already exists", input.email))
        }
        _ => AppError::Database(e),
    })
}

/// Find a client by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Client, AppError> {
    sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".to_string()))
}

/// Update a client by ID.
pub async fn update(pool: &PgPool, id: Uuid, input: &UpdateClient) -> Result<Client, AppError> {
    let existing = find_by_id(pool, id).await?;

    sqlx::query_as::<_, Client>(
        r#"
        UPDATE clients SET
            name = COALESCE($2, name),
            email = COALESCE($3, email),
            avatar = COALESCE($4, avatar),
            status = COALESCE($5, status)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(existing.id)
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.avatar)
    .bind(input.status)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Email is already in use by another client".to_string())
        }
        _ => AppError::Database(e),
    })
}

/// Delete a client by ID. Projects reference clients with ON DELETE CASCADE.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Client not found".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_uses_enum_cast() {
        let filters = ClientFilters {
            search: None,
            status: Some("inactive".to_string()),
        };
        assert_eq!(
            filters.to_filter_set().where_clause(),
            "WHERE status = $1::client_status"
        );
    }

    #[test]
    fn all_status_skips_filter() {
        let filters = ClientFilters {
            search: None,
            status: Some("all".to_string()),
        };
        assert!(filters.to_filter_set().is_empty());
    }
}
