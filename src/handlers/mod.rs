pub mod auth_handlers;

pub use auth_handlers::{
    login_handler, register_handler, status_handler, LoginResponse, MessageResponse,
    StatusResponse,
};

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// The JSON API routes, ready to be layered and served.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/status", get(status_handler))
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        .with_state(state)
}
