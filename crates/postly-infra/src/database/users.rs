//! Mongo-backed user directory.

use async_trait::async_trait;
use mongodb::{Collection, Database, bson, bson::doc};

use postly_core::domain::User;
use postly_core::error::RepoError;
use postly_core::ports::UserRepository;

use super::{USERS, map_err};

pub struct MongoUserRepository {
    users: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, RepoError> {
        self.users
            .find_one(doc! { "userId": user_id })
            .await
            .map_err(map_err)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "looking up user by email");

        self.users
            .find_one(doc! { "email": email })
            .await
            .map_err(map_err)
    }

    async fn upsert(&self, user: &User) -> Result<(), RepoError> {
        let profile = bson::to_document(user).map_err(|e| RepoError::Query(e.to_string()))?;

        self.users
            .update_one(
                doc! { "userId": user.user_id.as_str() },
                doc! { "$set": profile },
            )
            .upsert(true)
            .await
            .map_err(map_err)?;

        Ok(())
    }

    async fn insert(&self, user: &User) -> Result<(), RepoError> {
        self.users.insert_one(user).await.map_err(map_err)?;
        Ok(())
    }
}

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let masked_local = if local.len() > 1 {
            format!("{}***", &local[..1])
        } else {
            "***".to_string()
        };
        format!("{}{}", masked_local, domain)
    } else {
        "***".to_string()
    }
}
