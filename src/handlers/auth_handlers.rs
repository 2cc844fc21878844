use crate::error::{AppError, Result};
use crate::messages;
use crate::models::user::PublicUser;
use crate::services::{auth_service::LoginRequest, validation::RegisterRequest};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub registered: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: PublicUser,
}

/// GET /api/auth/status
pub async fn status_handler(State(state): State<AppState>) -> Result<Json<StatusResponse>> {
    let registered = state.auth_service.is_registered().await?;
    Ok(Json(StatusResponse { registered }))
}

/// POST /api/auth/register
pub async fn register_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(request) = payload.map_err(AppError::from)?;

    state.auth_service.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: messages::REGISTER_SUCCESS.to_string(),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(request) = payload.map_err(AppError::from)?;

    let user = state.auth_service.login(request).await?;

    Ok(Json(LoginResponse {
        message: messages::LOGIN_SUCCESS.to_string(),
        user,
    }))
}
