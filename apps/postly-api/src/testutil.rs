//! In-memory port implementations and fixtures backing the handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use postly_core::domain::{Comment, Like, Post, PostPatch, User};
use postly_core::error::RepoError;
use postly_core::ports::{
    AuthError, IdentityVerifier, LikeInsert, LikeRepository, PasswordService, PostFilter,
    PostPage, PostRepository, TokenService, UserRepository, VerifiedIdentity,
};
use postly_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

use crate::state::AppState;

/// In-memory user directory.
#[derive(Default)]
pub struct MemoryUserRepository {
    pub users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.user_id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn upsert(&self, user: &User) -> Result<(), RepoError> {
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter_mut().find(|u| u.user_id == user.user_id) {
            *existing = user.clone();
        } else {
            users.push(user.clone());
        }
        Ok(())
    }

    async fn insert(&self, user: &User) -> Result<(), RepoError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }
}

/// In-memory post store.
#[derive(Default)]
pub struct MemoryPostRepository {
    pub posts: Mutex<Vec<Post>>,
}

fn matches(post: &Post, filter: &PostFilter) -> bool {
    if let Some(status) = filter.status {
        if post.status != status {
            return false;
        }
    }
    if let Some(author_id) = &filter.author_id {
        if &post.author.user_id != author_id {
            return false;
        }
    }
    true
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn insert(&self, post: &Post) -> Result<(), RepoError> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn fetch_and_record_view(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        Ok(posts.iter_mut().find(|p| p.id == id).map(|p| {
            p.views += 1;
            p.clone()
        }))
    }

    async fn fetch_by_slug_and_record_view(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        Ok(posts.iter_mut().find(|p| p.slug == slug).map(|p| {
            p.views += 1;
            p.clone()
        }))
    }

    async fn slug_taken(&self, slug: &str, exclude_id: Option<&str>) -> Result<bool, RepoError> {
        let posts = self.posts.lock().unwrap();
        Ok(posts
            .iter()
            .any(|p| p.slug == slug && Some(p.id.as_str()) != exclude_id))
    }

    async fn page(
        &self,
        filter: &PostFilter,
        page: i64,
        limit: i64,
    ) -> Result<PostPage, RepoError> {
        let posts = self.posts.lock().unwrap();
        let mut matching: Vec<Post> = posts.iter().filter(|p| matches(p, filter)).cloned().collect();
        matching.sort_by_key(|p| p.created_at);
        matching.reverse();

        let total = matching.len() as u64;
        let skip = ((page - 1) * limit).max(0) as usize;
        let posts = matching
            .into_iter()
            .skip(skip)
            .take(limit.max(0) as usize)
            .collect();

        Ok(PostPage { posts, total })
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        use postly_core::domain::PostStatus;

        let needle = query.to_lowercase();
        let posts = self.posts.lock().unwrap();
        let mut found: Vec<Post> = posts
            .iter()
            .filter(|p| {
                p.status == PostStatus::Published
                    && (p.title.to_lowercase().contains(&needle)
                        || p.content.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        found.sort_by_key(|p| p.created_at);
        found.reverse();

        Ok(found)
    }

    async fn apply_patch(&self, id: &str, patch: &PostPatch) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = &patch.title {
            post.title = title.clone();
        }
        if let Some(slug) = &patch.slug {
            post.slug = slug.clone();
        }
        if let Some(content) = &patch.content {
            post.content = content.clone();
        }
        if let Some(read_time) = patch.read_time {
            post.read_time = read_time;
        }
        if let Some(status) = patch.status {
            post.status = status;
        }
        if let Some(cover_image) = &patch.cover_image {
            post.cover_image = cover_image.clone();
        }
        post.updated_at = patch.updated_at;

        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }

    async fn push_comment(&self, post_id: &str, comment: &Comment) -> Result<bool, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        match posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => {
                post.comments.push(comment.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn pull_comment(&self, post_id: &str, comment_id: &str) -> Result<bool, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        match posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => {
                let before = post.comments.len();
                post.comments.retain(|c| c.id != comment_id);
                Ok(post.comments.len() < before)
            }
            None => Ok(false),
        }
    }

    async fn inc_likes(&self, post_id: &str, delta: i64) -> Result<(), RepoError> {
        let mut posts = self.posts.lock().unwrap();
        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            post.likes += delta;
        }
        Ok(())
    }
}

/// In-memory like rows with the same uniqueness behavior the compound index
/// provides.
#[derive(Default)]
pub struct MemoryLikeRepository {
    pub likes: Mutex<Vec<Like>>,
}

#[async_trait]
impl LikeRepository for MemoryLikeRepository {
    async fn insert(&self, like: &Like) -> Result<LikeInsert, RepoError> {
        let mut likes = self.likes.lock().unwrap();
        if likes
            .iter()
            .any(|l| l.post_id == like.post_id && l.user_id == like.user_id)
        {
            return Ok(LikeInsert::AlreadyLiked);
        }
        likes.push(like.clone());
        Ok(LikeInsert::Inserted)
    }

    async fn remove(&self, post_id: &str, user_id: &str) -> Result<bool, RepoError> {
        let mut likes = self.likes.lock().unwrap();
        let before = likes.len();
        likes.retain(|l| !(l.post_id == post_id && l.user_id == user_id));
        Ok(likes.len() < before)
    }

    async fn exists(&self, post_id: &str, user_id: &str) -> Result<bool, RepoError> {
        let likes = self.likes.lock().unwrap();
        Ok(likes
            .iter()
            .any(|l| l.post_id == post_id && l.user_id == user_id))
    }

    async fn remove_all_for_post(&self, post_id: &str) -> Result<u64, RepoError> {
        let mut likes = self.likes.lock().unwrap();
        let before = likes.len();
        likes.retain(|l| l.post_id != post_id);
        Ok((before - likes.len()) as u64)
    }
}

/// Identity verifier that accepts tokens shaped `good:<subject>`.
pub struct StubIdentityVerifier;

#[async_trait]
impl IdentityVerifier for StubIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError> {
        match token.strip_prefix("good:") {
            Some(subject) => Ok(VerifiedIdentity {
                subject: subject.to_string(),
                email: format!("{subject}@example.com"),
                name: "Fed User".to_string(),
                picture: None,
            }),
            None => Err(AuthError::VerificationFailed(
                "unrecognized test token".to_string(),
            )),
        }
    }
}

/// Everything a handler test needs: the state over in-memory stores plus the
/// auth services the routes pull from app data.
pub struct TestContext {
    pub users: Arc<MemoryUserRepository>,
    pub posts: Arc<MemoryPostRepository>,
    pub likes: Arc<MemoryLikeRepository>,
    pub state: AppState,
    pub token_service: Arc<dyn TokenService>,
    pub password_service: Arc<dyn PasswordService>,
    pub identity_verifier: Arc<dyn IdentityVerifier>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MemoryUserRepository::default());
        let posts = Arc::new(MemoryPostRepository::default());
        let likes = Arc::new(MemoryLikeRepository::default());
        let state = AppState::with_repositories(users.clone(), posts.clone(), likes.clone());

        Self {
            users,
            posts,
            likes,
            state,
            token_service: Arc::new(JwtTokenService::new(JwtConfig {
                secret: "test-secret".to_string(),
                expiration_days: 7,
                issuer: "postly-test".to_string(),
            })),
            password_service: Arc::new(Argon2PasswordService::new()),
            identity_verifier: Arc::new(StubIdentityVerifier),
        }
    }

    /// Seed an account directly and return its id and a bearer token for it.
    pub fn seed_user(&self, name: &str, email: &str) -> (String, String) {
        let user = User::local(name.to_string(), email.to_string(), "seeded-hash".to_string());
        let user_id = user.user_id.clone();
        self.users.users.lock().unwrap().push(user);
        let token = self.token_service.generate_token(&user_id).unwrap();
        (user_id, token)
    }

    pub fn remove_user(&self, user_id: &str) {
        self.users
            .users
            .lock()
            .unwrap()
            .retain(|u| u.user_id != user_id);
    }
}

/// Build the full route table over a [`TestContext`].
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(crate::middleware::error::json_config())
                .app_data(crate::middleware::error::query_config())
                .app_data(actix_web::web::Data::new($ctx.state.clone()))
                .app_data(actix_web::web::Data::new($ctx.token_service.clone()))
                .app_data(actix_web::web::Data::new($ctx.password_service.clone()))
                .app_data(actix_web::web::Data::new($ctx.identity_verifier.clone()))
                .configure(crate::handlers::configure_routes),
        )
        .await
    };
}
pub(crate) use test_app;
