//! Application configuration loaded from environment variables.

use std::env;

use anyhow::Context;

use postly_infra::database::MongoConfig;

/// Application configuration. JWT settings are read separately by
/// `JwtTokenService::from_env`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo: MongoConfig,
    pub google_client_id: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables. `MONGODB_URI` is
    /// required; everything else has a default.
    pub fn from_env() -> anyhow::Result<Self> {
        let mongo = MongoConfig {
            uri: env::var("MONGODB_URI").context("MONGODB_URI must be set")?,
            database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "postly".to_string()),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            mongo,
            google_client_id: env::var("GOOGLE_CLIENT_ID").ok(),
        })
    }
}
