//! Author post listings.

use actix_web::{HttpResponse, web};

use postly_core::domain::PostStatus;
use postly_core::ports::PostFilter;
use postly_shared::dto::PageQuery;
use postly_shared::response::{Paginated, Pagination};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/users/{user_id}/posts - public author view, defaults to
/// published posts only.
pub async fn user_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let page = query.page.max(1);
    let limit = query.limit.max(1);
    let filter = PostFilter {
        status: Some(query.status.unwrap_or(PostStatus::Published)),
        author_id: Some(user_id),
    };

    let result = state.posts.page(&filter, page, limit).await?;

    Ok(HttpResponse::Ok().json(Paginated {
        posts: result.posts,
        pagination: Pagination::new(result.total, page, limit),
    }))
}

/// GET /api/users/me/posts - the caller's own posts; drafts included unless
/// a status filter narrows it.
pub async fn my_posts(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = query.page.max(1);
    let limit = query.limit.max(1);
    let filter = PostFilter {
        status: query.status,
        author_id: Some(identity.user_id),
    };

    let result = state.posts.page(&filter, page, limit).await?;

    Ok(HttpResponse::Ok().json(Paginated {
        posts: result.posts,
        pagination: Pagination::new(result.total, page, limit),
    }))
}
