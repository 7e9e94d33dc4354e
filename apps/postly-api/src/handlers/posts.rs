//! Post CRUD, listing, and search handlers.

use actix_web::{HttpResponse, web};

use postly_core::domain::{Post, PostPatch, PostStatus, read_time, slugify, unique_suffix};
use postly_core::ports::PostFilter;
use postly_shared::dto::{CreatePostRequest, PageQuery, SearchQuery, UpdatePostRequest};
use postly_shared::response::{MessageBody, Paginated, Pagination};

use super::{current_profile, ensure_post_id, post_not_found};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts - paginated listing, newest first, default status
/// `published`.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = query.page.max(1);
    let limit = query.limit.max(1);
    let filter = PostFilter {
        status: Some(query.status.unwrap_or(PostStatus::Published)),
        author_id: None,
    };

    let result = state.posts.page(&filter, page, limit).await?;

    Ok(HttpResponse::Ok().json(Paginated {
        posts: result.posts,
        pagination: Pagination::new(result.total, page, limit),
    }))
}

/// POST /api/posts - create a post authored by the session user.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.title.trim().is_empty() || req.content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Title and content are required".to_string(),
        ));
    }

    let author = current_profile(&state, &identity.user_id).await?;

    let mut slug = slugify(&req.title);
    if state.posts.slug_taken(&slug, None).await? {
        slug = format!("{slug}-{}", unique_suffix());
    }

    let post = Post::new(
        author,
        req.title,
        req.content,
        req.status.unwrap_or(PostStatus::Published),
        req.cover_image,
        slug,
    );
    state.posts.insert(&post).await?;

    tracing::info!(post_id = %post.id, slug = %post.slug, "post created");

    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts/{id} - fetch one post, counting the view.
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    ensure_post_id(&id)?;

    let post = state
        .posts
        .fetch_and_record_view(&id)
        .await?
        .ok_or_else(post_not_found)?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/posts/slug/{slug} - fetch one post by slug, counting the view.
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let post = state
        .posts
        .fetch_by_slug_and_record_view(&slug)
        .await?
        .ok_or_else(post_not_found)?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/posts/{id} - owner-only partial update.
///
/// A changed title recomputes the slug, a changed content recomputes the
/// read time; `updatedAt` is always bumped.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    ensure_post_id(&id)?;
    let req = body.into_inner();

    let post = state
        .posts
        .find_by_id(&id)
        .await?
        .ok_or_else(post_not_found)?;

    if post.author.user_id != identity.user_id {
        return Err(AppError::Unauthorized(
            "Unauthorized: you can only edit your own posts".to_string(),
        ));
    }

    let mut patch = PostPatch::new();

    if let Some(title) = req.title {
        let mut slug = slugify(&title);
        if state.posts.slug_taken(&slug, Some(id.as_str())).await? {
            slug = format!("{slug}-{}", unique_suffix());
        }
        patch.slug = Some(slug);
        patch.title = Some(title);
    }

    if let Some(content) = req.content {
        patch.read_time = Some(read_time(&content));
        patch.content = Some(content);
    }

    patch.status = req.status;
    patch.cover_image = req.cover_image;

    let updated = state
        .posts
        .apply_patch(&id, &patch)
        .await?
        .ok_or_else(post_not_found)?;

    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/posts/{id} - owner-only; cascades the post's like rows.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    ensure_post_id(&id)?;

    let post = state
        .posts
        .find_by_id(&id)
        .await?
        .ok_or_else(post_not_found)?;

    if post.author.user_id != identity.user_id {
        return Err(AppError::Unauthorized(
            "Unauthorized: you can only delete your own posts".to_string(),
        ));
    }

    if !state.posts.delete(&id).await? {
        return Err(post_not_found());
    }

    let removed = state.likes.remove_all_for_post(&id).await?;
    tracing::debug!(post_id = %id, likes_removed = removed, "post deleted");

    Ok(HttpResponse::Ok().json(MessageBody::new("Post deleted successfully")))
}

/// GET /api/posts/search?q= - substring search across published posts.
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    if query.q.is_empty() {
        return Err(AppError::BadRequest("Search query is required".to_string()));
    }

    let posts = state.posts.search(&query.q).await?;

    Ok(HttpResponse::Ok().json(posts))
}
