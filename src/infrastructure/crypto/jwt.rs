//! JWT token handling
//!
//! Every login-adjacent call issues a pair: a short-lived access token for
//! API calls and a long-lived refresh token that is only accepted by the
//! refresh endpoint. The `token_type` claim tells them apart.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SecurityConfig;

/// JWT configuration
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Issuer claim
    pub issuer: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self::from(&SecurityConfig::default())
    }
}

impl From<&SecurityConfig> for JwtConfig {
    fn from(cfg: &SecurityConfig) -> Self {
        Self {
            secret: cfg.jwt_secret.clone(),
            issuer: cfg.jwt_issuer.clone(),
            access_ttl: Duration::minutes(cfg.access_token_ttl_minutes),
            refresh_ttl: Duration::days(cfg.refresh_token_ttl_days),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    pub token_type: TokenType,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

impl TokenClaims {
    pub fn new(user_id: &str, email: &str, token_type: TokenType, config: &JwtConfig) -> Self {
        let now = Utc::now();
        let ttl = match token_type {
            TokenType::Access => config.access_ttl,
            TokenType::Refresh => config.refresh_ttl,
        };

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            token_type,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Sign arbitrary claims with the configured secret
pub fn encode_claims(
    claims: &TokenClaims,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

pub fn create_token(
    user_id: &str,
    email: &str,
    token_type: TokenType,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode_claims(&TokenClaims::new(user_id, email, token_type, config), config)
}

pub fn create_token_pair(
    user_id: &str,
    email: &str,
    config: &JwtConfig,
) -> Result<TokenPair, jsonwebtoken::errors::Error> {
    Ok(TokenPair {
        access_token: create_token(user_id, email, TokenType::Access, config)?,
        refresh_token: create_token(user_id, email, TokenType::Refresh, config)?,
    })
}

/// Verify signature, issuer and expiry, then decode the claims.
///
/// An expired token fails with `ErrorKind::ExpiredSignature`.
pub fn verify_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    #[test]
    fn pair_carries_both_token_types() {
        let config = JwtConfig::default();
        let pair = create_token_pair("user-123", "mark@example.com", &config).unwrap();

        let access = verify_token(&pair.access_token, &config).unwrap();
        assert_eq!(access.sub, "user-123");
        assert_eq!(access.email, "mark@example.com");
        assert_eq!(access.token_type, TokenType::Access);

        let refresh = verify_token(&pair.refresh_token, &config).unwrap();
        assert_eq!(refresh.token_type, TokenType::Refresh);
        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let config = JwtConfig::default();
        let mut claims = TokenClaims::new("u", "u@example.com", TokenType::Access, &config);
        claims.exp = (Utc::now() - Duration::hours(2)).timestamp();
        let token = encode_claims(&claims, &config).unwrap();

        let err = verify_token(&token, &config).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn foreign_secret_or_issuer_is_rejected() {
        let config = JwtConfig::default();
        let token = create_token("u", "u@example.com", TokenType::Access, &config).unwrap();

        let other_secret = JwtConfig {
            secret: "another-secret".into(),
            ..config.clone()
        };
        assert!(verify_token(&token, &other_secret).is_err());

        let other_issuer = JwtConfig {
            issuer: "someone-else".into(),
            ..config
        };
        assert!(verify_token(&token, &other_issuer).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verify_token("invalid-token", &JwtConfig::default()).is_err());
    }
}
