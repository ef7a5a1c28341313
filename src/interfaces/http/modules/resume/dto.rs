//! Résumé section DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Education, NewEducation, NewProject, NewWork, Project, Work};

// ── Education ───────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationDto {
    pub id: String,
    /// Stack or speciality studied
    #[schema(example = "FullStack Developer")]
    pub position: Option<String>,
    #[schema(example = "GoIT")]
    pub school_name: Option<String>,
    #[schema(example = "01.01.2022")]
    pub start_date: Option<String>,
    #[schema(example = "01.01.2023")]
    pub end_date: Option<String>,
    #[schema(example = "Kyiv, Ukraine")]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Education> for EducationDto {
    fn from(e: Education) -> Self {
        Self {
            id: e.id,
            position: e.position,
            school_name: e.school_name,
            start_date: e.start_date,
            end_date: e.end_date,
            address: e.address,
            created_at: e.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEducationRequest {
    #[schema(example = "FullStack Developer")]
    pub position: Option<String>,
    #[schema(example = "GoIT")]
    pub school_name: Option<String>,
    #[schema(example = "01.01.2022")]
    pub start_date: Option<String>,
    #[schema(example = "01.01.2023")]
    pub end_date: Option<String>,
    #[schema(example = "Kyiv, Ukraine")]
    pub address: Option<String>,
}

impl From<CreateEducationRequest> for NewEducation {
    fn from(r: CreateEducationRequest) -> Self {
        Self {
            position: r.position,
            school_name: r.school_name,
            start_date: r.start_date,
            end_date: r.end_date,
            address: r.address,
        }
    }
}

// ── Work ────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkDto {
    pub id: String,
    #[schema(example = "Junior FrontEnd")]
    pub position: Option<String>,
    #[schema(example = "SoftServe")]
    pub company_name: Option<String>,
    #[schema(example = "01.01.2022")]
    pub start_date: Option<String>,
    #[schema(example = "present")]
    pub end_date: Option<String>,
    #[schema(example = "Lviv, Ukraine")]
    pub address: Option<String>,
    pub duties: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Work> for WorkDto {
    fn from(w: Work) -> Self {
        Self {
            id: w.id,
            position: w.position,
            company_name: w.company_name,
            start_date: w.start_date,
            end_date: w.end_date,
            address: w.address,
            duties: w.duties,
            created_at: w.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkRequest {
    pub position: Option<String>,
    pub company_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub address: Option<String>,
    pub duties: Option<String>,
}

impl From<CreateWorkRequest> for NewWork {
    fn from(r: CreateWorkRequest) -> Self {
        Self {
            position: r.position,
            company_name: r.company_name,
            start_date: r.start_date,
            end_date: r.end_date,
            address: r.address,
            duties: r.duties,
        }
    }
}

// ── Project ─────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    #[schema(example = "Portfolio")]
    pub title: Option<String>,
    #[schema(example = "React, NestJS, PostgreSQL")]
    pub stack: Option<String>,
    #[schema(example = "Team lead")]
    pub role: Option<String>,
    pub description: Option<String>,
    #[schema(example = "https://my-portfolio.netlify.app")]
    pub link: Option<String>,
    #[schema(example = "https://github.com/user/portfolio")]
    pub repository: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            stack: p.stack,
            role: p.role,
            description: p.description,
            link: p.link,
            repository: p.repository,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub stack: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "crate::shared::validations::link"))]
    pub link: Option<String>,
    #[validate(custom(function = "crate::shared::validations::link"))]
    pub repository: Option<String>,
}

impl From<CreateProjectRequest> for NewProject {
    fn from(r: CreateProjectRequest) -> Self {
        Self {
            title: r.title,
            stack: r.stack,
            role: r.role,
            description: r.description,
            link: r.link,
            repository: r.repository,
        }
    }
}
