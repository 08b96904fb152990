//! Blog post service.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::blog::{BlogPost, CreateBlogPost, UpdateBlogPost};
use crate::models::pagination::{PageEnvelope, PageQuery};

/// List blog posts, newest first.
pub async fn list(pool: &PgPool, page: &PageQuery) -> Result<PageEnvelope<BlogPost>, AppError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blog_posts")
        .fetch_one(pool)
        .await?;

    let items = sqlx::query_as::<_, BlogPost>(
        "SELECT * FROM blog_posts ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(PageEnvelope::from_query(items, total, page))
}

/// Create a blog post.
pub async fn create(pool: &PgPool, input: &CreateBlogPost) -> Result<BlogPost, AppError> {
    let post = sqlx::query_as::<_, BlogPost>(
        r#"
        INSERT INTO blog_posts (title, excerpt, content, published)
        VALUES ($1, $2, $3, COALESCE($4, false))
        RETURNING *
        "#,
    )
    .bind(&input.title)
    .bind(&input.excerpt)
    .bind(&input.content)
    .bind(input.published)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a blog post by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<BlogPost, AppError> {
    sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))
}

/// Update a blog post by ID.
pub async fn update(pool: &PgPool, id: Uuid, input: &UpdateBlogPost) -> Result<BlogPost, AppError> {
    let existing = find_by_id(pool, id).await?;

    let post = sqlx::query_as::<_, BlogPost>(
        r#"
        UPDATE blog_posts SET
            title = COALESCE($2, title),
            excerpt = COALESCE($3, excerpt),
            content = COALESCE($4, content),
            published = COALESCE($5, published)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(existing.id)
    .bind(&input.title)
    .bind(&input.excerpt)
    .bind(&input.content)
    .bind(input.published)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Delete a blog post by ID.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Blog post not found".to_string()));
    }
    Ok(())
}
