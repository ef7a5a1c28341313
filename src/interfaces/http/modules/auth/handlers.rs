//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{LoginRequest, RegisterRequest};
use crate::application::UserService;
use crate::interfaces::http::common::{ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::Identity;
use crate::interfaces::http::modules::users::TokenUserResponse;

#[derive(Clone)]
pub struct AuthHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = TokenUserResponse),
        (status = 400, description = "Validation error", body = ApiResponse),
        (status = 409, description = "Email already exists", body = ApiResponse)
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenUserResponse>)> {
    let result = state.user_service.register(request.into()).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = TokenUserResponse),
        (status = 400, description = "Validation error", body = ApiResponse),
        (status = 401, description = "Invalid credentials", body = ApiResponse)
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenUserResponse>> {
    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    let result = state.user_service.login(&email, &password).await?;
    Ok(Json(result.into()))
}

#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Fresh token pair", body = TokenUserResponse),
        (status = 401, description = "Not authorized jwt expired || Not authorized Invalid token type", body = ApiResponse)
    )
)]
pub async fn refresh(
    State(state): State<AuthHandlerState>,
    identity: Identity,
) -> ApiResult<Json<TokenUserResponse>> {
    let result = state.user_service.refresh(&identity.id).await?;
    Ok(Json(result.into()))
}
