//! Profile API handlers
//!
//! All routes sit behind the access-token guard. The user being read or
//! changed is always the token's owner; request bodies carry no id.
//! Delegates to `UserService` from the application/identity layer.

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::{
    TokenUserResponse, UpdateConsentOfUseRequest, UpdateSampleColorSchemaRequest,
    UpdateUserRequest, UserOnlyResponse,
};
use crate::application::UserService;
use crate::interfaces::http::common::{ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::Identity;

#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    get,
    path = "/api/users/current",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user with a fresh token pair", body = TokenUserResponse),
        (status = 401, description = "Not authorized jwt expired || Not authorized Invalid token type", body = ApiResponse),
        (status = 404, description = "Not found", body = ApiResponse),
        (status = 500, description = "Server error", body = ApiResponse)
    )
)]
pub async fn current_user(
    State(state): State<UserHandlerState>,
    identity: Identity,
) -> ApiResult<Json<TokenUserResponse>> {
    let result = state.user_service.current(&identity.email).await?;
    Ok(Json(result.into()))
}

#[utoipa::path(
    patch,
    path = "/api/users/update",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserOnlyResponse),
        (status = 400, description = "Validation error", body = ApiResponse),
        (status = 401, description = "Not authorized jwt expired || Not authorized Invalid token type", body = ApiResponse),
        (status = 404, description = "Not found", body = ApiResponse),
        (status = 500, description = "Server error", body = ApiResponse)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    identity: Identity,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserOnlyResponse>> {
    let result = state
        .user_service
        .update(&identity.id, request.into())
        .await?;
    Ok(Json(result.into()))
}

#[utoipa::path(
    patch,
    path = "/api/users/update-sample-color",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdateSampleColorSchemaRequest,
    responses(
        (status = 200, description = "Updated user", body = UserOnlyResponse),
        (status = 400, description = "Validation error", body = ApiResponse),
        (status = 401, description = "Not authorized", body = ApiResponse)
    )
)]
pub async fn update_sample_color(
    State(state): State<UserHandlerState>,
    identity: Identity,
    ValidatedJson(request): ValidatedJson<UpdateSampleColorSchemaRequest>,
) -> ApiResult<Json<UserOnlyResponse>> {
    let result = state
        .user_service
        .update(&identity.id, request.into())
        .await?;
    Ok(Json(result.into()))
}

#[utoipa::path(
    patch,
    path = "/api/users/update-consent-use",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdateConsentOfUseRequest,
    responses(
        (status = 200, description = "Updated user", body = UserOnlyResponse),
        (status = 400, description = "Validation error", body = ApiResponse),
        (status = 401, description = "Not authorized", body = ApiResponse)
    )
)]
pub async fn update_consent_use(
    State(state): State<UserHandlerState>,
    identity: Identity,
    ValidatedJson(request): ValidatedJson<UpdateConsentOfUseRequest>,
) -> ApiResult<Json<UserOnlyResponse>> {
    let result = state
        .user_service
        .update(&identity.id, request.into())
        .await?;
    Ok(Json(result.into()))
}

#[utoipa::path(
    delete,
    path = "/api/users/delete",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account and résumé sections deleted", body = ApiResponse),
        (status = 401, description = "Not authorized", body = ApiResponse),
        (status = 404, description = "Not found", body = ApiResponse)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    identity: Identity,
) -> ApiResult<Json<ApiResponse>> {
    state.user_service.delete(&identity.id).await?;
    Ok(Json(ApiResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::{middleware, routing::get, routing::patch, Router};
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use tower::Service;

    use crate::application::Registration;
    use crate::infrastructure::crypto::jwt::{
        create_token, encode_claims, JwtConfig, TokenClaims, TokenType,
    };
    use crate::interfaces::http::middleware::{access_token_guard, AuthState};
    use crate::test_support::InMemoryUserRepository;

    struct Harness {
        router: Router,
        repo: Arc<InMemoryUserRepository>,
        service: Arc<UserService>,
        config: JwtConfig,
    }

    fn harness() -> Harness {
        let config = JwtConfig::default();
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = Arc::new(UserService::new(repo.clone(), config.clone()));

        let router = Router::new()
            .route("/current", get(current_user))
            .route("/update", patch(update_user))
            .layer(middleware::from_fn_with_state(
                AuthState {
                    jwt_config: config.clone(),
                },
                access_token_guard,
            ))
            .with_state(UserHandlerState {
                user_service: service.clone(),
            });

        Harness {
            router,
            repo,
            service,
            config,
        }
    }

    async fn register(h: &Harness) -> (String, String) {
        let result = h
            .service
            .register(Registration {
                email: "mark@example.com".into(),
                password: "password1".into(),
                first_name: Some("Mark".into()),
                last_name: None,
                user_agreement: true,
            })
            .await
            .unwrap();
        (result.profile.user.id, result.tokens.access_token)
    }

    async fn call(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let mut svc = router.clone().into_service();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn get_current(token: &str) -> Request<Body> {
        Request::builder()
            .uri("/current")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap()
    }

    fn patch_update(token: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("PATCH")
            .uri("/update")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn current_returns_token_pair_and_user() {
        let h = harness();
        let (id, token) = register(&h).await;

        let (status, json) = call(&h.router, get_current(&token)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["accessToken"].is_string());
        assert!(json["refreshToken"].is_string());
        assert_eq!(json["user"]["id"], id);
        assert_eq!(json["user"]["firstName"], "Mark");
        assert!(json["user"].get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn expired_or_wrong_type_token_never_reaches_the_service() {
        let h = harness();
        let (id, _) = register(&h).await;
        let before = h.repo.calls();

        let mut claims = TokenClaims::new(&id, "mark@example.com", TokenType::Access, &h.config);
        claims.exp = (Utc::now() - Duration::hours(1)).timestamp();
        let expired = encode_claims(&claims, &h.config).unwrap();
        let (status, json) = call(&h.router, get_current(&expired)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Not authorized jwt expired");

        let refresh = create_token(&id, "mark@example.com", TokenType::Refresh, &h.config).unwrap();
        let (status, json) = call(&h.router, get_current(&refresh)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Not authorized Invalid token type");

        assert_eq!(h.repo.calls(), before);
    }

    #[tokio::test]
    async fn update_without_required_fields_is_rejected_before_the_service() {
        let h = harness();
        let (_, token) = register(&h).await;

        let (status, json) = call(&h.router, patch_update(&token, json!({"position": "QA"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = json["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["firstName", "lastName", "phone"]);
        assert_eq!(h.repo.update_calls(), 0);
    }

    #[tokio::test]
    async fn update_returns_only_user_and_ignores_body_id() {
        let h = harness();
        let (id, token) = register(&h).await;

        let body = json!({
            "id": "someone-else",
            "firstName": "Marko",
            "lastName": "Spencer",
            "phone": "+380998887776",
            "telegram": "https://t.me/validname",
        });
        let (status, json) = call(&h.router, patch_update(&token, body)).await;
        assert_eq!(status, StatusCode::OK);

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["user"]);
        assert_eq!(json["user"]["id"], id);
        assert_eq!(json["user"]["firstName"], "Marko");
        assert_eq!(json["user"]["telegram"], "https://t.me/validname");
        assert_eq!(h.repo.update_calls(), 1);
    }
}
