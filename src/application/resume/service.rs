use std::sync::Arc;

use tracing::info;

use crate::domain::{
    DomainResult, Education, NewEducation, NewProject, NewWork, Project,
    ResumeRepositoryInterface, Work,
};

/// Owner-scoped résumé operations. The caller id always comes from the
/// verified token, never from a request body.
pub struct ResumeService {
    repo: Arc<dyn ResumeRepositoryInterface>,
}

impl ResumeService {
    pub fn new(repo: Arc<dyn ResumeRepositoryInterface>) -> Self {
        Self { repo }
    }

    // ── Education ───────────────────────────────────────────────

    pub async fn add_education(&self, user_id: &str, dto: NewEducation) -> DomainResult<Education> {
        let education = self.repo.add_education(user_id, dto).await?;
        info!(user_id, education_id = %education.id, "Education added");
        Ok(education)
    }

    pub async fn educations(&self, user_id: &str) -> DomainResult<Vec<Education>> {
        self.repo.list_educations(user_id).await
    }

    pub async fn delete_education(&self, user_id: &str, id: &str) -> DomainResult<()> {
        self.repo.delete_education(user_id, id).await?;
        info!(user_id, education_id = id, "Education deleted");
        Ok(())
    }

    // ── Work ────────────────────────────────────────────────────

    pub async fn add_work(&self, user_id: &str, dto: NewWork) -> DomainResult<Work> {
        let work = self.repo.add_work(user_id, dto).await?;
        info!(user_id, work_id = %work.id, "Work added");
        Ok(work)
    }

    pub async fn works(&self, user_id: &str) -> DomainResult<Vec<Work>> {
        self.repo.list_works(user_id).await
    }

    pub async fn delete_work(&self, user_id: &str, id: &str) -> DomainResult<()> {
        self.repo.delete_work(user_id, id).await?;
        info!(user_id, work_id = id, "Work deleted");
        Ok(())
    }

    // ── Projects ────────────────────────────────────────────────

    pub async fn add_project(&self, user_id: &str, dto: NewProject) -> DomainResult<Project> {
        let project = self.repo.add_project(user_id, dto).await?;
        info!(user_id, project_id = %project.id, "Project added");
        Ok(project)
    }

    pub async fn projects(&self, user_id: &str) -> DomainResult<Vec<Project>> {
        self.repo.list_projects(user_id).await
    }

    pub async fn delete_project(&self, user_id: &str, id: &str) -> DomainResult<()> {
        self.repo.delete_project(user_id, id).await?;
        info!(user_id, project_id = id, "Project deleted");
        Ok(())
    }
}
