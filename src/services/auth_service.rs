use crate::models::user::{NewUser, PublicUser, Role};
use crate::repositories::user_repository::{RepositoryError, UserRepository};
use crate::services::password::{self, PasswordError};
use crate::services::validation::{validate_register, RegisterRequest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Email already registered")]
    EmailTaken,
    #[error("Email not found")]
    EmailNotFound,
    #[error("Account is not active")]
    AccountInactive,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] PasswordError),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Whether at least one user has registered.
    pub async fn is_registered(&self) -> Result<bool, AuthServiceError> {
        Ok(self.user_repository.any_user_exists().await?)
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<(), AuthServiceError> {
        let errors = validate_register(&request);
        if !errors.is_empty() {
            debug!(count = errors.len(), "Registration rejected by validation");
            return Err(AuthServiceError::Validation(errors));
        }

        // Validation guarantees presence of the required fields.
        let (Some(username), Some(email), Some(password)) =
            (request.username, request.email, request.password)
        else {
            return Err(AuthServiceError::MissingCredentials);
        };
        let email = email.trim().to_string();

        // Advisory only; the unique index on email is what actually prevents duplicates.
        if self.user_repository.find_by_email(&email).await?.is_some() {
            debug!(email = %email, "Registration rejected: email taken");
            return Err(AuthServiceError::EmailTaken);
        }

        let password_hash = password::hash_password_blocking(password).await?;

        let new_user = NewUser {
            username: username.trim().to_string(),
            email,
            password_hash,
            full_name: request
                .full_name
                .filter(|name| !name.is_empty())
                .map(|name| name.trim().to_string()),
            role: Role::User,
            is_active: true,
        };

        match self.user_repository.create_user(new_user).await {
            Ok(user) => {
                info!(user_id = user.id, "User registered");
                Ok(())
            }
            Err(RepositoryError::AlreadyExists) => {
                debug!("Registration lost race on unique email");
                Err(AuthServiceError::EmailTaken)
            }
            Err(e) => Err(AuthServiceError::RepositoryError(e)),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<PublicUser, AuthServiceError> {
        let email = request.email.filter(|e| !e.is_empty());
        let password = request.password.filter(|p| !p.is_empty());
        let (Some(email), Some(password)) = (email, password) else {
            return Err(AuthServiceError::MissingCredentials);
        };

        let user = self
            .user_repository
            .find_by_email(email.trim())
            .await?
            .ok_or(AuthServiceError::EmailNotFound)?;

        if !user.is_active {
            info!(user_id = user.id, "Login refused for inactive account");
            return Err(AuthServiceError::AccountInactive);
        }

        if !password::verify_password_blocking(password, user.password.clone()).await? {
            debug!(user_id = user.id, "Login failed: password mismatch");
            return Err(AuthServiceError::InvalidPassword);
        }

        info!(user_id = user.id, "User logged in");
        Ok(PublicUser::from(user))
    }
}
