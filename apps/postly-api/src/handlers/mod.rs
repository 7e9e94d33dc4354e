//! HTTP handlers and route configuration.

mod auth;
mod comments;
mod health;
mod likes;
mod posts;
mod users;


use actix_web::web;

use postly_core::domain::{UserProfile, valid_object_id};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::home)).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth::login))
                    .route("/login/email", web::post().to(auth::login_email))
                    .route("/register", web::post().to(auth::register))
                    .route("/check", web::get().to(auth::check)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/search", web::get().to(posts::search))
                    .route("/slug/{slug}", web::get().to(posts::get_by_slug))
                    .route("/{id}", web::get().to(posts::get_by_id))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/comments", web::get().to(comments::list))
                    .route("/{id}/comments", web::post().to(comments::create))
                    .route(
                        "/{id}/comments/{comment_id}",
                        web::delete().to(comments::delete),
                    )
                    .route("/{id}/like", web::post().to(likes::like))
                    .route("/{id}/like", web::delete().to(likes::unlike))
                    .route("/{id}/like", web::get().to(likes::check)),
            )
            .service(
                web::scope("/users")
                    .route("/me/posts", web::get().to(users::my_posts))
                    .route("/{user_id}/posts", web::get().to(users::user_posts)),
            ),
    );
}

/// Profile snapshot of the acting user, for embedding as an author.
pub(crate) async fn current_profile(
    state: &AppState,
    user_id: &str,
) -> Result<UserProfile, AppError> {
    let user = state
        .users
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    Ok(UserProfile::from(&user))
}

pub(crate) fn post_not_found() -> AppError {
    AppError::NotFound("Post not found".to_string())
}

/// Post ids are ObjectId hex; anything shaped differently reads as absent.
pub(crate) fn ensure_post_id(id: &str) -> Result<(), AppError> {
    if valid_object_id(id) {
        Ok(())
    } else {
        Err(post_not_found())
    }
}
