use async_trait::async_trait;

use super::{CreateUserDto, UpdateUserDto, User, UserProfile};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Fails with `Conflict` when the email is taken
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn get_profile(&self, id: &str) -> DomainResult<Option<UserProfile>>;

    async fn update_user(&self, id: &str, dto: UpdateUserDto) -> DomainResult<Option<User>>;

    /// Removes the user and every row that references it
    async fn delete_user(&self, id: &str) -> DomainResult<()>;
}
