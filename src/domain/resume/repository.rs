use async_trait::async_trait;

use super::{Education, NewEducation, NewProject, NewWork, Project, Work};
use crate::domain::DomainResult;

/// Owner-scoped access to résumé sections.
///
/// `delete_*` returns `NotFound` both for unknown ids and for rows owned by
/// another user.
#[async_trait]
pub trait ResumeRepositoryInterface: Send + Sync {
    async fn add_education(&self, user_id: &str, dto: NewEducation) -> DomainResult<Education>;
    async fn list_educations(&self, user_id: &str) -> DomainResult<Vec<Education>>;
    async fn delete_education(&self, user_id: &str, id: &str) -> DomainResult<()>;

    async fn add_work(&self, user_id: &str, dto: NewWork) -> DomainResult<Work>;
    async fn list_works(&self, user_id: &str) -> DomainResult<Vec<Work>>;
    async fn delete_work(&self, user_id: &str, id: &str) -> DomainResult<()>;

    async fn add_project(&self, user_id: &str, dto: NewProject) -> DomainResult<Project>;
    async fn list_projects(&self, user_id: &str) -> DomainResult<Vec<Project>>;
    async fn delete_project(&self, user_id: &str, id: &str) -> DomainResult<()>;
}
