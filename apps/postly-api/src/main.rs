//! # Postly API
//!
//! The actix-web entry point for the Postly blogging platform.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
#[cfg(test)]
mod testutil;

use config::AppConfig;
use postly_core::ports::{IdentityVerifier, PasswordService, TokenService};
use postly_infra::auth::{Argon2PasswordService, GoogleIdentityVerifier, JwtTokenService};
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!("Starting Postly API on {}:{}", config.host, config.port);

    let state = AppState::new(&config.mongo)
        .await
        .context("failed to initialize the document store")?;

    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
    let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

    if config.google_client_id.is_none() {
        tracing::warn!("GOOGLE_CLIENT_ID not set; federated login will be rejected");
    }
    let identity_verifier: Arc<dyn IdentityVerifier> = Arc::new(GoogleIdentityVerifier::new(
        config.google_client_id.clone().unwrap_or_default(),
    ));

    let host = config.host.clone();
    let port = config.port;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(middleware::error::json_config())
            .app_data(middleware::error::query_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_service.clone()))
            .app_data(web::Data::new(password_service.clone()))
            .app_data(web::Data::new(identity_verifier.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,postly_api=debug,postly_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
