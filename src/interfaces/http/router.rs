//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{ResumeService, UserService};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::{ResumeRepository, UserRepository};
use crate::interfaces::http::common::{ApiResponse, FieldError};
use crate::interfaces::http::middleware::{access_token_guard, refresh_token_guard, AuthState};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{auth, health, resume, users};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Access token; /api/auth/refresh takes the refresh token",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        auth::refresh,
        // Users
        users::current_user,
        users::update_user,
        users::update_sample_color,
        users::update_consent_use,
        users::delete_user,
        // Résumé sections
        resume::create_education,
        resume::list_educations,
        resume::delete_education,
        resume::create_work,
        resume::list_works,
        resume::delete_work,
        resume::create_project,
        resume::list_projects,
        resume::delete_project,
    ),
    components(
        schemas(
            // Common
            ApiResponse,
            FieldError,
            health::HealthResponse,
            health::ComponentHealth,
            // Auth
            auth::RegisterRequest,
            auth::LoginRequest,
            // Users
            users::UpdateUserRequest,
            users::UpdateSampleColorSchemaRequest,
            users::UpdateConsentOfUseRequest,
            users::UserResponse,
            users::TokenUserResponse,
            users::UserOnlyResponse,
            // Résumé sections
            resume::EducationDto,
            resume::CreateEducationRequest,
            resume::WorkDto,
            resume::CreateWorkRequest,
            resume::ProjectDto,
            resume::CreateProjectRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Registration, login and token refresh"),
        (name = "Users", description = "The caller's own profile"),
        (name = "Educations", description = "Education entries of the caller"),
        (name = "Works", description = "Work history of the caller"),
        (name = "Projects", description = "Projects of the caller"),
    ),
    info(
        title = "Profile Service API",
        version = "1.0.0",
        description = "User profiles and résumé sections behind JWT access/refresh tokens",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection, jwt_config: JwtConfig) -> Router {
    let user_service = Arc::new(UserService::new(
        Arc::new(UserRepository::new(db.clone())),
        jwt_config.clone(),
    ));
    let resume_service = Arc::new(ResumeService::new(Arc::new(ResumeRepository::new(
        db.clone(),
    ))));

    let middleware_state = AuthState { jwt_config };

    // Auth routes (public)
    let auth_state = auth::AuthHandlerState {
        user_service: user_service.clone(),
    };
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .with_state(auth_state.clone());

    // Refresh takes the refresh token, not the access token
    let refresh_routes = Router::new()
        .route("/refresh", post(auth::refresh))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            refresh_token_guard,
        ))
        .with_state(auth_state);

    // User routes (protected)
    let user_routes = Router::new()
        .route("/current", get(users::current_user))
        .route("/update", patch(users::update_user))
        .route("/update-sample-color", patch(users::update_sample_color))
        .route("/update-consent-use", patch(users::update_consent_use))
        .route("/delete", delete(users::delete_user))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            access_token_guard,
        ))
        .with_state(users::UserHandlerState { user_service });

    // Résumé routes (protected)
    let resume_state = resume::ResumeHandlerState { resume_service };
    let education_routes = Router::new()
        .route("/", get(resume::list_educations).post(resume::create_education))
        .route("/{id}", delete(resume::delete_education))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            access_token_guard,
        ))
        .with_state(resume_state.clone());

    let work_routes = Router::new()
        .route("/", get(resume::list_works).post(resume::create_work))
        .route("/{id}", delete(resume::delete_work))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            access_token_guard,
        ))
        .with_state(resume_state.clone());

    let project_routes = Router::new()
        .route("/", get(resume::list_projects).post(resume::create_project))
        .route("/{id}", delete(resume::delete_project))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            access_token_guard,
        ))
        .with_state(resume_state);

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .merge(health_routes)
        // Auth
        .nest("/api/auth", auth_routes)
        .nest("/api/auth", refresh_routes)
        // Users
        .nest("/api/users", user_routes)
        // Résumé sections
        .nest("/api/educations", education_routes)
        .nest("/api/works", work_routes)
        .nest("/api/projects", project_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}
