//! Like, unlike, and like-status handlers.
//!
//! Both directions are idempotent. The row insert and the counter bump on
//! the post are two separate writes; the unique index on the row keeps the
//! relation itself exact even when the counter drifts.

use actix_web::{HttpResponse, web};

use postly_core::domain::Like;
use postly_core::ports::LikeInsert;
use postly_shared::response::{LikedBody, MessageBody};

use super::{ensure_post_id, post_not_found};
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts/{id}/like
pub async fn like(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    ensure_post_id(&post_id)?;

    if state.posts.find_by_id(&post_id).await?.is_none() {
        return Err(post_not_found());
    }

    let like = Like::new(post_id.clone(), identity.user_id);
    match state.likes.insert(&like).await? {
        LikeInsert::Inserted => {
            state.posts.inc_likes(&post_id, 1).await?;
            Ok(HttpResponse::Ok().json(MessageBody::new("Post liked successfully")))
        }
        LikeInsert::AlreadyLiked => {
            Ok(HttpResponse::Ok().json(MessageBody::new("Post already liked")))
        }
    }
}

/// DELETE /api/posts/{id}/like
pub async fn unlike(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    ensure_post_id(&post_id)?;

    if state.likes.remove(&post_id, &identity.user_id).await? {
        state.posts.inc_likes(&post_id, -1).await?;
        Ok(HttpResponse::Ok().json(MessageBody::new("Post unliked successfully")))
    } else {
        Ok(HttpResponse::Ok().json(MessageBody::new("Post was not liked")))
    }
}

/// GET /api/posts/{id}/like - whether the session user liked this post.
pub async fn check(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    ensure_post_id(&post_id)?;

    let liked = state.likes.exists(&post_id, &identity.user_id).await?;

    Ok(HttpResponse::Ok().json(LikedBody { liked }))
}
