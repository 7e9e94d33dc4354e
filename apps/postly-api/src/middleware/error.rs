//! Error handling at the HTTP boundary.
//!
//! Every route-level failure becomes the JSON body `{ "error": message }`
//! with the matching status. Programming and infrastructure faults map to
//! 500 and keep their detail in the logs, never in the body.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};

use postly_core::error::RepoError;
use postly_core::ports::AuthError;
use postly_shared::ErrorBody;

/// Application-level error type for handler results.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Internal(detail) => {
                tracing::error!("internal error: {}", detail);
                "Internal server error".to_string()
            }
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::Unauthorized(msg) => {
                msg.clone()
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorBody::new(message))
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) | RepoError::Query(msg) | RepoError::Constraint(msg) => {
                AppError::Internal(msg)
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired
            | AuthError::InvalidToken(_)
            | AuthError::MissingAuth
            | AuthError::VerificationFailed(_) => AppError::Unauthorized(err.to_string()),
            AuthError::HashingError(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// JSON extractor config that keeps malformed bodies on the error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Query extractor config that keeps malformed parameters on the error shape.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
