//! Authentication handlers.

use std::sync::Arc;

use actix_web::{HttpResponse, web};

use postly_core::domain::{User, UserProfile};
use postly_core::ports::{IdentityVerifier, PasswordService, TokenService};
use postly_shared::dto::{FederatedLoginRequest, LoginRequest, RegisterRequest};
use postly_shared::response::AuthResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/login - federated login with a provider-issued ID token.
///
/// Verifies the token, upserts the profile under the provider subject id and
/// mints a session token for it.
pub async fn login(
    state: web::Data<AppState>,
    verifier: web::Data<Arc<dyn IdentityVerifier>>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<FederatedLoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.token.is_empty() {
        return Err(AppError::BadRequest("Token is required".to_string()));
    }

    let identity = verifier.verify(&req.token).await?;

    let user = User::federated(identity.subject, identity.name, identity.email, identity.picture);
    state.users.upsert(&user).await?;

    let access_token = token_service.generate_token(&user.user_id)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token,
        user: UserProfile::from(&user),
    }))
}

/// POST /api/auth/register - local registration with email and password.
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::BadRequest("User already exists".to_string()));
    }

    let password_hash = password_service.hash(&req.password)?;
    let user = User::local(req.name, req.email, password_hash);
    state.users.insert(&user).await?;

    let access_token = token_service.generate_token(&user.user_id)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        access_token,
        user: UserProfile::from(&user),
    }))
}

/// POST /api/auth/login/email - local login.
///
/// A missing account and a wrong password fail identically, so the response
/// does not reveal which one it was.
pub async fn login_email(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let valid = match &user.password_hash {
        Some(hash) => password_service.verify(&req.password, hash)?,
        None => false,
    };
    if !valid {
        return Err(invalid_credentials());
    }

    let access_token = token_service.generate_token(&user.user_id)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token,
        user: UserProfile::from(&user),
    }))
}

/// GET /api/auth/check - profile for a valid session, 401 once the account
/// is gone.
pub async fn check(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let profile = super::current_profile(&state, &identity.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid credentials".to_string())
}
