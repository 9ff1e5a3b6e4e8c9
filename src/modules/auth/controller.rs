use axum::Json;
use tracing::instrument;
use utoipa::ToSchema;

use super::model::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use super::service::AuthService;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register_user(
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Json<MessageResponse> {
    Json(AuthService::register_user(&dto))
}

/// Login and receive a token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(ValidatedJson(dto): ValidatedJson<LoginRequest>) -> Json<LoginResponse> {
    Json(AuthService::login_user(&dto))
}
