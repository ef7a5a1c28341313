//! Authentication middleware for Axum
//!
//! `authorize` is the whole guard: it turns an `Authorization` header into
//! an [`Identity`] or an [`AuthError`]. The middleware functions only call it
//! and stash the identity in the request extensions, so a rejected request
//! never reaches a handler.

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header, request::Parts, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;
use tracing::debug;

use super::common::ApiResponse;
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenType};

/// Guard failures. The display text is the response message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Not authorized")]
    MissingToken,
    #[error("Not authorized Invalid token")]
    InvalidToken,
    #[error("Not authorized jwt expired")]
    ExpiredToken,
    #[error("Not authorized Invalid token type")]
    InvalidTokenType,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(ApiResponse::error(self.to_string()))).into_response()
    }
}

/// The caller, as proven by a verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

/// State shared by the guard middlewares
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Validate an `Authorization` header value against the expected token type.
pub fn authorize(
    auth_header: Option<&str>,
    expected: TokenType,
    config: &JwtConfig,
) -> Result<Identity, AuthError> {
    let auth_header = auth_header.ok_or(AuthError::MissingToken)?;
    let token = extract_token(auth_header).ok_or(AuthError::InvalidToken)?;

    let claims = verify_token(token, config).map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        _ => AuthError::InvalidToken,
    })?;

    if claims.token_type != expected {
        return Err(AuthError::InvalidTokenType);
    }

    Ok(Identity {
        id: claims.sub,
        email: claims.email,
    })
}

async fn guard(
    auth_state: &AuthState,
    expected: TokenType,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match authorize(auth_header, expected, &auth_state.jwt_config) {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(e) => {
            debug!(error = ?e, uri = %request.uri(), "Request rejected by auth guard");
            e.into_response()
        }
    }
}

/// Requires an access token
pub async fn access_token_guard(
    State(auth_state): State<AuthState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    guard(&auth_state, TokenType::Access, request, next).await
}

/// Requires a refresh token; only mounted on the refresh endpoint
pub async fn refresh_token_guard(
    State(auth_state): State<AuthState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    guard(&auth_state, TokenType::Refresh, request, next).await
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::jwt::{create_token, encode_claims, TokenClaims};
    use chrono::{Duration, Utc};

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    #[test]
    fn access_token_yields_identity() {
        let config = JwtConfig::default();
        let token = create_token("u-1", "u@example.com", TokenType::Access, &config).unwrap();

        let identity = authorize(Some(&bearer(&token)), TokenType::Access, &config).unwrap();
        assert_eq!(
            identity,
            Identity {
                id: "u-1".into(),
                email: "u@example.com".into()
            }
        );
    }

    #[test]
    fn missing_or_malformed_header() {
        let config = JwtConfig::default();
        assert_eq!(
            authorize(None, TokenType::Access, &config),
            Err(AuthError::MissingToken)
        );
        assert_eq!(
            authorize(Some("Basic abc"), TokenType::Access, &config),
            Err(AuthError::InvalidToken)
        );
        assert_eq!(
            authorize(Some("Bearer "), TokenType::Access, &config),
            Err(AuthError::InvalidToken)
        );
        assert_eq!(
            authorize(Some("Bearer not-a-jwt"), TokenType::Access, &config),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn expired_token() {
        let config = JwtConfig::default();
        let mut claims = TokenClaims::new("u-1", "u@example.com", TokenType::Access, &config);
        claims.exp = (Utc::now() - Duration::hours(1)).timestamp();
        let token = encode_claims(&claims, &config).unwrap();

        assert_eq!(
            authorize(Some(&bearer(&token)), TokenType::Access, &config),
            Err(AuthError::ExpiredToken)
        );
    }

    #[test]
    fn wrong_token_type() {
        let config = JwtConfig::default();
        let refresh = create_token("u-1", "u@example.com", TokenType::Refresh, &config).unwrap();
        let access = create_token("u-1", "u@example.com", TokenType::Access, &config).unwrap();

        assert_eq!(
            authorize(Some(&bearer(&refresh)), TokenType::Access, &config),
            Err(AuthError::InvalidTokenType)
        );
        assert_eq!(
            authorize(Some(&bearer(&access)), TokenType::Refresh, &config),
            Err(AuthError::InvalidTokenType)
        );
    }

    #[test]
    fn messages() {
        assert_eq!(AuthError::ExpiredToken.to_string(), "Not authorized jwt expired");
        assert_eq!(
            AuthError::InvalidTokenType.to_string(),
            "Not authorized Invalid token type"
        );
    }
}
