use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::messages;
use crate::services::auth_service::AuthServiceError;

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Failures surfaced at the HTTP boundary.
///
/// | Variant            | Status | Body                          |
/// |--------------------|--------|-------------------------------|
/// | Validation         | 400    | `{"errors": [...]}`           |
/// | MalformedBody      | 400    | `{"message": ...}`            |
/// | MissingCredentials | 400    | `{"message": ...}`            |
/// | Conflict           | 400    | `{"message": ...}`            |
/// | NotFound           | 400    | `{"message": ...}`            |
/// | Authentication     | 400    | `{"message": ...}`            |
/// | Forbidden          | 403    | `{"message": ...}`            |
/// | Internal           | 500    | `{"message": "Server xatosi."}` |
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Email already registered")]
    Conflict,

    #[error("Email not found")]
    NotFound,

    #[error("Account is not active")]
    Forbidden,

    #[error("Invalid password")]
    Authentication,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::Validation(errors) => AppError::Validation(errors),
            AuthServiceError::MissingCredentials => AppError::MissingCredentials,
            AuthServiceError::EmailTaken => AppError::Conflict,
            AuthServiceError::EmailNotFound => AppError::NotFound,
            AuthServiceError::AccountInactive => AppError::Forbidden,
            AuthServiceError::InvalidPassword => AppError::Authentication,
            other @ (AuthServiceError::Hashing(_) | AuthServiceError::RepositoryError(_)) => {
                AppError::Internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, json!({ "errors": errors })),
            AppError::MalformedBody(detail) => {
                tracing::debug!(detail = %detail, "Rejected malformed request body");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "message": messages::MALFORMED_REQUEST }),
                )
            }
            AppError::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                json!({ "message": messages::CREDENTIALS_REQUIRED }),
            ),
            AppError::Conflict => (
                StatusCode::BAD_REQUEST,
                json!({ "message": messages::EMAIL_TAKEN }),
            ),
            AppError::NotFound => (
                StatusCode::BAD_REQUEST,
                json!({ "message": messages::EMAIL_NOT_FOUND }),
            ),
            AppError::Authentication => (
                StatusCode::BAD_REQUEST,
                json!({ "message": messages::WRONG_PASSWORD }),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                json!({ "message": messages::ACCOUNT_INACTIVE }),
            ),
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": messages::SERVER_ERROR }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::RepositoryError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation(vec![]).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Conflict.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Authentication.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Forbidden.into_response().status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_faults_become_internal() {
        let err: AppError =
            AuthServiceError::RepositoryError(RepositoryError::Database(sqlx::Error::PoolTimedOut))
                .into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
