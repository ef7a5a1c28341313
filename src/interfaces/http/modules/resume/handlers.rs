//! Résumé section handlers
//!
//! Every route is owner-scoped: the user id comes from the verified access
//! token, so one user can never list or delete another user's rows.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateEducationRequest, CreateProjectRequest, CreateWorkRequest, EducationDto, ProjectDto,
    WorkDto,
};
use crate::application::ResumeService;
use crate::interfaces::http::common::{ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::Identity;

#[derive(Clone)]
pub struct ResumeHandlerState {
    pub resume_service: Arc<ResumeService>,
}

// ── Education ───────────────────────────────────────────────────

#[utoipa::path(
    post,
    path = "/api/educations",
    tag = "Educations",
    security(("bearer_auth" = [])),
    request_body = CreateEducationRequest,
    responses(
        (status = 201, description = "Education added", body = EducationDto),
        (status = 400, description = "Validation error", body = ApiResponse),
        (status = 401, description = "Not authorized", body = ApiResponse)
    )
)]
pub async fn create_education(
    State(state): State<ResumeHandlerState>,
    identity: Identity,
    ValidatedJson(request): ValidatedJson<CreateEducationRequest>,
) -> ApiResult<(StatusCode, Json<EducationDto>)> {
    let education = state
        .resume_service
        .add_education(&identity.id, request.into())
        .await?;
    Ok((StatusCode::CREATED, Json(education.into())))
}

#[utoipa::path(
    get,
    path = "/api/educations",
    tag = "Educations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's education list", body = Vec<EducationDto>),
        (status = 401, description = "Not authorized", body = ApiResponse)
    )
)]
pub async fn list_educations(
    State(state): State<ResumeHandlerState>,
    identity: Identity,
) -> ApiResult<Json<Vec<EducationDto>>> {
    let items = state.resume_service.educations(&identity.id).await?;
    Ok(Json(items.into_iter().map(EducationDto::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/api/educations/{id}",
    tag = "Educations",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Education ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse),
        (status = 404, description = "Not found", body = ApiResponse)
    )
)]
pub async fn delete_education(
    State(state): State<ResumeHandlerState>,
    identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse>> {
    state
        .resume_service
        .delete_education(&identity.id, &id)
        .await?;
    Ok(Json(ApiResponse::ok()))
}

// ── Work ────────────────────────────────────────────────────────

#[utoipa::path(
    post,
    path = "/api/works",
    tag = "Works",
    security(("bearer_auth" = [])),
    request_body = CreateWorkRequest,
    responses(
        (status = 201, description = "Work added", body = WorkDto),
        (status = 401, description = "Not authorized", body = ApiResponse)
    )
)]
pub async fn create_work(
    State(state): State<ResumeHandlerState>,
    identity: Identity,
    ValidatedJson(request): ValidatedJson<CreateWorkRequest>,
) -> ApiResult<(StatusCode, Json<WorkDto>)> {
    let work = state
        .resume_service
        .add_work(&identity.id, request.into())
        .await?;
    Ok((StatusCode::CREATED, Json(work.into())))
}

#[utoipa::path(
    get,
    path = "/api/works",
    tag = "Works",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's work history", body = Vec<WorkDto>),
        (status = 401, description = "Not authorized", body = ApiResponse)
    )
)]
pub async fn list_works(
    State(state): State<ResumeHandlerState>,
    identity: Identity,
) -> ApiResult<Json<Vec<WorkDto>>> {
    let items = state.resume_service.works(&identity.id).await?;
    Ok(Json(items.into_iter().map(WorkDto::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/api/works/{id}",
    tag = "Works",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Work ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse),
        (status = 404, description = "Not found", body = ApiResponse)
    )
)]
pub async fn delete_work(
    State(state): State<ResumeHandlerState>,
    identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse>> {
    state.resume_service.delete_work(&identity.id, &id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ── Projects ────────────────────────────────────────────────────

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    security(("bearer_auth" = [])),
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project added", body = ProjectDto),
        (status = 400, description = "Validation error", body = ApiResponse),
        (status = 401, description = "Not authorized", body = ApiResponse)
    )
)]
pub async fn create_project(
    State(state): State<ResumeHandlerState>,
    identity: Identity,
    ValidatedJson(request): ValidatedJson<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let project = state
        .resume_service
        .add_project(&identity.id, request.into())
        .await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's projects", body = Vec<ProjectDto>),
        (status = 401, description = "Not authorized", body = ApiResponse)
    )
)]
pub async fn list_projects(
    State(state): State<ResumeHandlerState>,
    identity: Identity,
) -> ApiResult<Json<Vec<ProjectDto>>> {
    let items = state.resume_service.projects(&identity.id).await?;
    Ok(Json(items.into_iter().map(ProjectDto::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "Projects",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse),
        (status = 404, description = "Not found", body = ApiResponse)
    )
)]
pub async fn delete_project(
    State(state): State<ResumeHandlerState>,
    identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse>> {
    state
        .resume_service
        .delete_project(&identity.id, &id)
        .await?;
    Ok(Json(ApiResponse::ok()))
}
