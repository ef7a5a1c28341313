//! User management service — application-layer orchestration
//!
//! All user-related business logic lives here.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, UpdateUserDto, UserProfile, UserRepositoryInterface,
};
use crate::infrastructure::crypto::jwt::{create_token_pair, JwtConfig, TokenPair};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::shared::InfraError;

/// Profile plus a freshly issued token pair
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub profile: UserProfile,
    pub tokens: TokenPair,
}

/// Input for [`UserService::register`]; already validated by the caller
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_agreement: bool,
}

/// User service — orchestrates identity and profile use-cases.
pub struct UserService {
    repo: Arc<dyn UserRepositoryInterface>,
    jwt_config: JwtConfig,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepositoryInterface>, jwt_config: JwtConfig) -> Self {
        Self { repo, jwt_config }
    }

    // ── Authentication ──────────────────────────────────────────

    pub async fn register(&self, registration: Registration) -> DomainResult<AuthResult> {
        if self
            .repo
            .get_user_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict("Email already exists".into()));
        }

        let password_hash = hash_password(&registration.password)
            .map_err(|e| InfraError::Crypto(format!("Failed to hash password: {}", e)))?;

        let user = self
            .repo
            .create_user(CreateUserDto {
                email: registration.email,
                password_hash,
                first_name: registration.first_name,
                last_name: registration.last_name,
                user_agreement: registration.user_agreement,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "New user registered");
        self.issue(&user.id).await
    }

    /// Check credentials and hand out a token pair.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let Some(user) = self.repo.get_user_by_email(email).await? else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        if !verify_password(password, &user.password_hash) {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        info!(user_id = %user.id, "User logged in");
        self.issue(&user.id).await
    }

    /// New token pair for the owner of a valid refresh token
    pub async fn refresh(&self, user_id: &str) -> DomainResult<AuthResult> {
        self.issue(user_id).await
    }

    // ── Profile ─────────────────────────────────────────────────

    /// Full profile of the authenticated user plus a fresh token pair.
    pub async fn current(&self, email: &str) -> DomainResult<AuthResult> {
        let user = self
            .repo
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| DomainError::user_not_found("email", email))?;

        self.issue(&user.id).await
    }

    /// Apply a partial update to the user's own profile.
    pub async fn update(&self, id: &str, dto: UpdateUserDto) -> DomainResult<AuthResult> {
        self.repo
            .update_user(id, dto)
            .await?
            .ok_or_else(|| DomainError::user_not_found("id", id))?;

        info!(user_id = id, "Profile updated");
        self.issue(id).await
    }

    /// Delete the account together with its résumé sections.
    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.repo.delete_user(id).await
    }

    async fn issue(&self, id: &str) -> DomainResult<AuthResult> {
        let profile = self
            .repo
            .get_profile(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found("id", id))?;

        let tokens = create_token_pair(&profile.user.id, &profile.user.email, &self.jwt_config)
            .map_err(|e| InfraError::Crypto(format!("Failed to create token: {}", e)))?;

        Ok(AuthResult { profile, tokens })
    }
}
