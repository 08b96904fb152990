//! Blog post routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{validation_message, AppError};
use crate::middleware::rbac::RequireManager;
use crate::models::blog::{BlogPost, CreateBlogPost, UpdateBlogPost};
use crate::models::pagination::{PageEnvelope, PageQuery};
use crate::routes::MessageResponse;
use crate::services::blogs as blog_service;
use crate::AppState;

/// GET /api/blogs
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<PageEnvelope<BlogPost>>, AppError> {
    let result = blog_service::list(&state.db, &page).await?;
    Ok(Json(result))
}

/// POST /api/blogs (manager+).
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Json(body): Json<CreateBlogPost>,
) -> Result<Json<BlogPost>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let post = blog_service::create(&state.db, &body).await?;
    Ok(Json(post))
}

/// GET /api/blogs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>, AppError> {
    let post = blog_service::find_by_id(&state.db, id).await?;
    Ok(Json(post))
}

/// PUT /api/blogs/{id} (manager+).
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateBlogPost>,
) -> Result<Json<BlogPost>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;
    let post = blog_service::update(&state.db, id, &body).await?;
    Ok(Json(post))
}

/// DELETE /api/blogs/{id} (manager+).
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_admin): RequireManager,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    blog_service::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Blog post removed")))
}
