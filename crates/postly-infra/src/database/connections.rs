//! MongoDB client setup and startup index creation.

use mongodb::{Client, Database, IndexModel, bson::doc, options::IndexOptions};

use postly_core::domain::{Like, User};
use postly_core::error::RepoError;

use super::{POST_LIKES, USERS};

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

/// Connect and ensure the indexes the repositories rely on.
pub async fn connect(config: &MongoConfig) -> Result<Database, RepoError> {
    let client = Client::with_uri_str(&config.uri)
        .await
        .map_err(|e| RepoError::Connection(e.to_string()))?;
    let db = client.database(&config.database);

    ensure_indexes(&db).await?;

    tracing::info!(database = %config.database, "document store connected");
    Ok(db)
}

/// The unique `(postId, userId)` index is what keeps `like` idempotent under
/// concurrent requests; the handler's existence pre-check alone cannot be.
async fn ensure_indexes(db: &Database) -> Result<(), RepoError> {
    let unique = IndexOptions::builder().unique(true).build();

    db.collection::<User>(USERS)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "userId": 1 })
                .options(unique.clone())
                .build(),
        )
        .await
        .map_err(|e| RepoError::Connection(e.to_string()))?;

    db.collection::<Like>(POST_LIKES)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "postId": 1, "userId": 1 })
                .options(unique)
                .build(),
        )
        .await
        .map_err(|e| RepoError::Connection(e.to_string()))?;

    Ok(())
}
