pub mod auth_service;
pub mod password;
pub mod validation;

pub use auth_service::{AuthService, AuthServiceError, LoginRequest};
pub use validation::{validate_register, RegisterRequest};
