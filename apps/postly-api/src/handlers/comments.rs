//! Comment handlers - embedded sub-documents of a post.

use actix_web::{HttpResponse, web};

use postly_core::domain::{Comment, CommentAuthor};
use postly_shared::dto::CreateCommentRequest;
use postly_shared::response::MessageBody;

use super::{current_profile, ensure_post_id, post_not_found};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts/{id}/comments - insertion order, any post status.
pub async fn list(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    ensure_post_id(&id)?;

    let post = state
        .posts
        .find_by_id(&id)
        .await?
        .ok_or_else(post_not_found)?;

    Ok(HttpResponse::Ok().json(post.comments))
}

/// POST /api/posts/{id}/comments - append a comment by the session user.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    ensure_post_id(&id)?;
    let req = body.into_inner();

    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Comment content is required".to_string(),
        ));
    }

    let profile = current_profile(&state, &identity.user_id).await?;
    let comment = Comment::new(CommentAuthor::from(&profile), req.content);

    if !state.posts.push_comment(&id, &comment).await? {
        return Err(post_not_found());
    }

    Ok(HttpResponse::Created().json(comment))
}

/// DELETE /api/posts/{id}/comments/{comment_id} - removable by the comment's
/// author or the post's author.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    ensure_post_id(&post_id)?;

    let post = state
        .posts
        .find_by_id(&post_id)
        .await?
        .ok_or_else(post_not_found)?;

    let comment = post
        .comments
        .iter()
        .find(|c| c.id == comment_id)
        .ok_or_else(comment_not_found)?;

    if comment.author.user_id != identity.user_id && post.author.user_id != identity.user_id {
        return Err(AppError::Unauthorized(
            "Unauthorized: you can only delete your own comments".to_string(),
        ));
    }

    if !state.posts.pull_comment(&post_id, &comment_id).await? {
        return Err(comment_not_found());
    }

    Ok(HttpResponse::Ok().json(MessageBody::new("Comment deleted successfully")))
}

fn comment_not_found() -> AppError {
    AppError::NotFound("Comment not found".to_string())
}
