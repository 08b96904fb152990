//! Project service: paginated client-join listing with portfolio stats,
//! and CRUD.

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::filter::FilterSet;
use crate::models::pagination::{PageEnvelope, PageQuery};
use crate::models::project::{
    CreateProject, Project, ProjectStats, ProjectStatus, ProjectWithClient, UpdateProject,
};

/// Filters for listing projects.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectFilters {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl ProjectFilters {
    fn to_filter_set(&self) -> FilterSet {
        let mut filter = FilterSet::new();
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            filter.search(&["p.name", "c.name"], term);
        }
        if let Some(status) = self.status.as_deref().and_then(ProjectStatus::from_query) {
            filter.eq_enum("p.status", "project_status", status.as_str());
        }
        filter
    }
}

/// List projects joined with client display fields, newest first, with the
/// portfolio aggregate attached to `meta.stats`.
///
/// The stats cover ALL projects, not the filtered page — the dashboard
/// header shows portfolio totals regardless of the table view.
pub async fn list(
    pool: &PgPool,
    filters: &ProjectFilters,
    page: &PageQuery,
) -> Result<PageEnvelope<ProjectWithClient>, AppError> {
    let filter = filters.to_filter_set();
    let where_clause = filter.where_clause();

    let count_sql = format!(
        "SELECT COUNT(*) FROM projects p LEFT JOIN clients c ON p.client_id = c.id {where_clause}"
    );
    let data_sql = format!(
        "SELECT p.id, p.name, p.client_id, c.name AS client_name, c.avatar AS client_avatar, \
                p.project_type, p.pricing_package, p.value, p.status, p.description, \
                p.start_date, p.created_at \
         FROM projects p LEFT JOIN clients c ON p.client_id = c.id \
         {where_clause} ORDER BY p.created_at DESC LIMIT {} OFFSET {}",
        page.limit(),
        page.offset()
    );

    let total = filter.fetch_count(pool, &count_sql).await?;
    let items: Vec<ProjectWithClient> = filter.fetch_rows(pool, &data_sql).await?;

    let stats = fetch_stats(pool).await?;
    let stats_value = serde_json::to_value(&stats)
        .map_err(|e| AppError::Internal(format!("Failed to serialize stats: {e}")))?;

    Ok(PageEnvelope::from_query(items, total, page).with_stats(stats_value))
}

/// Portfolio aggregate: total value plus per-status counts, in one
/// conditional-aggregation query.
pub async fn fetch_stats(pool: &PgPool) -> Result<ProjectStats, AppError> {
    let row = sqlx::query_as::<_, StatsRow>(
        r#"
        SELECT
            COALESCE(SUM(value), 0)::BIGINT AS total_value,
            COUNT(*) FILTER (WHERE status = 'active') AS active,
            COUNT(*) FILTER (WHERE status = 'pending') AS pending,
            COUNT(*) FILTER (WHERE status = 'completed') AS completed
        FROM projects
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(ProjectStats {
        total_value: row.total_value,
        active: row.active,
        pending: row.pending,
        completed: row.completed,
    })
}

#[derive(Debug, sqlx::FromRow)]
struct StatsRow {
    total_value: i64,
    active: i64,
    pending: i64,
    completed: i64,
}

/// Create a new project. The referenced client must exist.
pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, AppError> {
    super::clients::find_by_id(pool, input.client_id).await?;

    let project = sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (name, client_id, project_type, pricing_package, value,
            status, description, start_date)
        VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'pending'), $7, $8)
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(input.client_id)
    .bind(input.project_type)
    .bind(input.pricing_package)
    .bind(input.value)
    .bind(input.status)
    .bind(&input.description)
    .bind(input.start_date)
    .fetch_one(pool)
    .await?;

    Ok(project)
}

/// Find a project by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Project, AppError> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
}

/// Update a project by ID.
pub async fn update(pool: &PgPool, id: Uuid, input: &UpdateProject) -> Result<Project, AppError> {
    let existing = find_by_id(pool, id).await?;

    if let Some(client_id) = input.client_id {
        super::clients::find_by_id(pool, client_id).await?;
    }

    let project = sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects SET
            name = COALESCE($2, name),
            client_id = COALESCE($3, client_id),
            project_type = COALESCE($4, project_type),
            pricing_package = COALESCE($5, pricing_package),
            value = COALESCE($6, value),
            status = COALESCE($7, status),
            description = COALESCE($8, description),
            start_date = COALESCE($9, start_date)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(existing.id)
    .bind(&input.name)
    .bind(input.client_id)
    .bind(input.project_type)
    .bind(input.pricing_package)
    .bind(input.value)
    .bind(input.status)
    .bind(&input.description)
    .bind(input.start_date)
    .fetch_one(pool)
    .await?;

    Ok(project)
}

/// Delete a project by ID.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Project not found".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_covers_project_and_client_name() {
        let filters = ProjectFilters {
            search: Some("banking".to_string()),
            status: None,
        };
        assert_eq!(
            filters.to_filter_set().where_clause(),
            "WHERE (p.name ILIKE $1 OR c.name ILIKE $1)"
        );
    }

    #[test]
    fn status_filter_targets_project_table() {
        let filters = ProjectFilters {
            search: None,
            status: Some("active".to_string()),
        };
        assert_eq!(
            filters.to_filter_set().where_clause(),
            "WHERE p.status = $1::project_status"
        );
    }
}
