//! Contact submission service: status-filtered listing and the review
//! workflow.

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::contact::{ContactStatus, ContactSubmission};
use crate::models::filter::FilterSet;
use crate::models::pagination::{PageEnvelope, PageQuery};

/// Filters for listing contact submissions.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContactFilters {
    pub status: Option<String>,
}

impl ContactFilters {
    fn to_filter_set(&self) -> FilterSet {
        let mut filter = FilterSet::new();
        if let Some(status) = self.status.as_deref().and_then(ContactStatus::from_query) {
            filter.eq_enum("status", "contact_status", status.as_str());
        }
        filter
    }
}

/// List contact submissions, newest first.
pub async fn list(
    pool: &PgPool,
    filters: &ContactFilters,
    page: &PageQuery,
) -> Result<PageEnvelope<ContactSubmission>, AppError> {
    let filter = filters.to_filter_set();
    let where_clause = filter.where_clause();

    let count_sql = format!("SELECT COUNT(*) FROM contact_submissions {where_clause}");
    let data_sql = format!(
        "SELECT * FROM contact_submissions {where_clause} ORDER BY created_at DESC LIMIT {} OFFSET {}",
        page.limit(),
        page.offset()
    );

    let total = filter.fetch_count(pool, &count_sql).await?;
    let items: Vec<ContactSubmission> = filter.fetch_rows(pool, &data_sql).await?;

    Ok(PageEnvelope::from_query(items, total, page))
}

/// Move a submission through the review workflow.
pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: ContactStatus,
) -> Result<ContactSubmission, AppError> {
    sqlx::query_as::<_, ContactSubmission>(
        "UPDATE contact_submissions SET status = $2 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Contact submission not found".to_string()))
}

/// Delete a submission by ID.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Contact submission not found".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_all_skips_filter() {
        let filters = ContactFilters {
            status: Some("all".to_string()),
        };
        assert!(filters.to_filter_set().is_empty());
    }

    #[test]
    fn known_status_filters() {
        let filters = ContactFilters {
            status: Some("replied".to_string()),
        };
        assert_eq!(
            filters.to_filter_set().where_clause(),
            "WHERE status = $1::contact_status"
        );
    }
}
