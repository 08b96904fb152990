//! Team member service: filtered, paginated listing and CRUD.

use serde::Deserialize;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::filter::FilterSet;
use crate::models::member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use crate::models::pagination::{PageEnvelope, PageQuery};

/// Text columns covered by the `search` parameter.
const SEARCH_COLUMNS: &[&str] = &["name", "email", "role"];

/// Filters for listing team members.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TeamFilters {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl TeamFilters {
    fn to_filter_set(&self) -> FilterSet {
        let mut filter = FilterSet::new();
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            filter.search(SEARCH_COLUMNS, term);
        }
        // `online`/`offline` map onto the boolean column; anything else
        // (including `all` and absent) skips the clause.
        match self.status.as_deref() {
            Some("online") => {
                filter.eq_bool("online", true);
            }
            Some("offline") => {
                filter.eq_bool("online", false);
            }
            _ => {}
        }
        filter
    }
}

/// List team members with filters and pagination, newest first.
pub async fn list(
    pool: &PgPool,
    filters: &TeamFilters,
    page: &PageQuery,
) -> Result<PageEnvelope<TeamMember>, AppError> {
    let filter = filters.to_filter_set();
    let where_clause = filter.where_clause();

    let count_sql = format!("SELECT COUNT(*) FROM team_members {where_clause}");
    let data_sql = format!(
        "SELECT * FROM team_members {where_clause} ORDER BY created_at DESC LIMIT {} OFFSET {}",
        page.limit(),
        page.offset()
    );

    let total = filter.fetch_count(pool, &count_sql).await?;
    let items: Vec<TeamMember> = filter.fetch_rows(pool, &data_sql).await?;

    Ok(PageEnvelope::from_query(items, total, page))
}

/// Create a new team member.
pub async fn create(pool: &PgPool, input: &CreateTeamMember) -> Result<TeamMember, AppError> {
    let tags = Json(input.tags.clone().unwrap_or_default());

    sqlx::query_as::<_, TeamMember>(
        r#"
        INSERT INTO team_members (name, email, role, tags, online, avatar_url)
        VALUES ($1, $2, $3, $4, COALESCE($5, false), $6)
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.role)
    .bind(&tags)
    .bind(input.online)
    .bind(&input.avatar_url)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("Member with email '{}' already exists", input.email))
        }
        _ => AppError::Database(e),
    })
}

/// Find a team member by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<TeamMember, AppError> {
    sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Team member not found".to_string()))
}

/// Update a team member by ID.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &UpdateTeamMember,
) -> Result<TeamMember, AppError> {
    let existing = find_by_id(pool, id).await?;
    let tags = input.tags.clone().map(Json);

    sqlx::query_as::<_, TeamMember>(
        r#"
        UPDATE team_members SET
            name = COALESCE($2, name),
            email = COALESCE($3, email),
            role = COALESCE($4, role),
            tags = COALESCE($5, tags),
            online = COALESCE($6, online),
            avatar_url = COALESCE($7, avatar_url)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(existing.id)
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.role)
    .bind(&tags)
    .bind(input.online)
    .bind(&input.avatar_url)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Email is already in use by another member".to_string())
        }
        _ => AppError::Database(e),
    })
}

/// Delete a team member by ID.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Team member not found".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_and_status_build_combined_filter() {
        let filters = TeamFilters {
            search: Some("tom".to_string()),
            status: Some("online".to_string()),
        };
        let filter = filters.to_filter_set();
        assert_eq!(
            filter.where_clause(),
            "WHERE (name ILIKE $1 OR email ILIKE $1 OR role ILIKE $1) AND online = $2"
        );
    }

    #[test]
    fn blank_search_and_unknown_status_are_skipped() {
        let filters = TeamFilters {
            search: Some("   ".to_string()),
            status: Some("away".to_string()),
        };
        assert!(filters.to_filter_set().is_empty());
    }

    #[test]
    fn offline_maps_to_false() {
        let filters = TeamFilters {
            search: None,
            status: Some("offline".to_string()),
        };
        let filter = filters.to_filter_set();
        assert_eq!(filter.where_clause(), "WHERE online = $1");
    }
}
