use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - one document per account in the `users` collection.
///
/// `user_id` is the stable identity: the provider subject for federated
/// accounts, a generated ObjectId hex for local accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    pub last_login: DateTime<Utc>,
}

impl User {
    /// Account created through local registration.
    pub fn local(name: String, email: String, password_hash: String) -> Self {
        Self {
            user_id: ObjectId::new().to_hex(),
            name,
            email,
            password_hash: Some(password_hash),
            profile_picture: None,
            last_login: Utc::now(),
        }
    }

    /// Account created or refreshed through federated login. Never carries a
    /// password hash; serialization skips the field so an upsert cannot
    /// clobber one.
    pub fn federated(
        subject: String,
        name: String,
        email: String,
        picture: Option<String>,
    ) -> Self {
        Self {
            user_id: subject,
            name,
            email,
            password_hash: None,
            profile_picture: picture,
            last_login: Utc::now(),
        }
    }
}

/// Public snapshot of a user: returned by the auth routes and embedded in
/// posts as the author.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            profile_picture: user.profile_picture.clone(),
        }
    }
}
