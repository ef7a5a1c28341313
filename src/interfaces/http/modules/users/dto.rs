//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::AuthResult;
use crate::domain::{UpdateUserDto, User, UserProfile};
use crate::interfaces::http::modules::resume::{EducationDto, ProjectDto, WorkDto};
use crate::shared::validations::{link, local_phone, phone_number, telegram_link};

// ── Requests ────────────────────────────────────────────────────

/// Profile update. `firstName`, `lastName` and `phone` are mandatory; every
/// other field is optional and checked only when present.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[schema(example = "Mark")]
    #[validate(
        required(message = "firstName should not be empty"),
        length(min = 1, message = "firstName should not be empty")
    )]
    pub first_name: Option<String>,

    #[serde(rename = "firstName_ua")]
    #[schema(example = "Павло")]
    pub first_name_ua: Option<String>,

    #[schema(example = "Spencer")]
    #[validate(
        required(message = "lastName should not be empty"),
        length(min = 1, message = "lastName should not be empty")
    )]
    pub last_name: Option<String>,

    #[serde(rename = "lastName_ua")]
    #[schema(example = "Наливайко")]
    pub last_name_ua: Option<String>,

    #[schema(example = "+380998887776")]
    #[validate(
        required(message = "phone should not be empty"),
        custom(function = "phone_number")
    )]
    pub phone: Option<String>,

    #[schema(example = "FrontEnd")]
    pub position: Option<String>,

    /// Résumé url
    #[schema(example = "https://drive.google.com/drive/u/0/my-drive")]
    #[validate(custom(function = "link"))]
    pub resume: Option<String>,

    #[schema(example = "Beginner/Elementary(A1)")]
    pub english_level: Option<String>,
    #[schema(example = "Native")]
    pub ukraine_langue: Option<String>,
    #[schema(example = "Native")]
    pub russian_langue: Option<String>,

    #[schema(example = "I`m FullStack developer...")]
    pub about_me: Option<String>,

    #[serde(rename = "aboutMe_ua")]
    #[schema(example = "Я FullStack розробник...")]
    pub about_me_ua: Option<String>,

    #[schema(example = "https://t.me/name")]
    #[validate(custom(function = "telegram_link"))]
    pub telegram: Option<String>,

    #[schema(example = "https://www.linkedin.com/in/user/")]
    #[validate(custom(function = "link"))]
    pub linkedin: Option<String>,

    #[schema(example = "https://github.com/user")]
    #[validate(custom(function = "link"))]
    pub github: Option<String>,

    #[schema(example = "https://www.facebook.com/profile.php")]
    #[validate(custom(function = "link"))]
    pub facebook: Option<String>,

    #[schema(example = "https://www.instagram.com")]
    #[validate(custom(function = "link"))]
    pub instagram: Option<String>,

    #[schema(example = "+380999999999")]
    #[validate(custom(function = "local_phone"))]
    pub viber: Option<String>,

    #[schema(example = "+380999999999")]
    #[validate(custom(function = "local_phone"))]
    pub whatsapp: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserDto {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            first_name: r.first_name,
            first_name_ua: r.first_name_ua,
            last_name: r.last_name,
            last_name_ua: r.last_name_ua,
            phone: r.phone,
            position: r.position,
            resume: r.resume,
            english_level: r.english_level,
            ukraine_langue: r.ukraine_langue,
            russian_langue: r.russian_langue,
            about_me: r.about_me,
            about_me_ua: r.about_me_ua,
            telegram: r.telegram,
            linkedin: r.linkedin,
            github: r.github,
            facebook: r.facebook,
            instagram: r.instagram,
            viber: r.viber,
            whatsapp: r.whatsapp,
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSampleColorSchemaRequest {
    #[schema(example = "default")]
    #[validate(
        required(message = "colorSchema should not be empty"),
        length(min = 1, message = "colorSchema should not be empty")
    )]
    pub color_schema: Option<String>,

    #[schema(example = "default")]
    #[validate(
        required(message = "sample should not be empty"),
        length(min = 1, message = "sample should not be empty")
    )]
    pub sample: Option<String>,
}

impl From<UpdateSampleColorSchemaRequest> for UpdateUserDto {
    fn from(r: UpdateSampleColorSchemaRequest) -> Self {
        Self {
            color_schema: r.color_schema,
            sample: r.sample,
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConsentOfUseRequest {
    #[schema(example = false)]
    #[validate(required(message = "consentOfUse must be a boolean value"))]
    pub consent_of_use: Option<bool>,

    #[schema(example = "https://my-site.netlify.app?id=a70fdfe5-c1b5-4c1c-b603-b4847358d102")]
    #[validate(
        required(message = "This should have been a link"),
        custom(function = "link")
    )]
    pub site_resume: Option<String>,
}

impl From<UpdateConsentOfUseRequest> for UpdateUserDto {
    fn from(r: UpdateConsentOfUseRequest) -> Self {
        Self {
            consent_of_use: r.consent_of_use,
            site_resume: r.site_resume,
            ..Default::default()
        }
    }
}

// ── Responses ───────────────────────────────────────────────────

/// Public view of a user; never carries the password hash
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "29be42a1-5318-4535-bd85-f7e34cc03acb")]
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    #[serde(rename = "firstName_ua")]
    pub first_name_ua: Option<String>,
    pub last_name: Option<String>,
    #[serde(rename = "lastName_ua")]
    pub last_name_ua: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub resume: Option<String>,
    pub english_level: Option<String>,
    pub ukraine_langue: Option<String>,
    pub russian_langue: Option<String>,
    pub about_me: Option<String>,
    #[serde(rename = "aboutMe_ua")]
    pub about_me_ua: Option<String>,
    pub telegram: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub viber: Option<String>,
    pub whatsapp: Option<String>,
    pub user_agreement: bool,
    pub consent_of_use: bool,
    pub site_resume: Option<String>,
    pub color_schema: Option<String>,
    pub sample: Option<String>,
    pub educations: Vec<EducationDto>,
    pub works: Vec<WorkDto>,
    pub projects: Vec<ProjectDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    fn from_user(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            first_name_ua: u.first_name_ua,
            last_name: u.last_name,
            last_name_ua: u.last_name_ua,
            phone: u.phone,
            position: u.position,
            resume: u.resume,
            english_level: u.english_level,
            ukraine_langue: u.ukraine_langue,
            russian_langue: u.russian_langue,
            about_me: u.about_me,
            about_me_ua: u.about_me_ua,
            telegram: u.telegram,
            linkedin: u.linkedin,
            github: u.github,
            facebook: u.facebook,
            instagram: u.instagram,
            viber: u.viber,
            whatsapp: u.whatsapp,
            user_agreement: u.user_agreement,
            consent_of_use: u.consent_of_use,
            site_resume: u.site_resume,
            color_schema: u.color_schema,
            sample: u.sample,
            educations: Vec::new(),
            works: Vec::new(),
            projects: Vec::new(),
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

impl From<UserProfile> for UserResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            educations: p.educations.into_iter().map(EducationDto::from).collect(),
            works: p.works.into_iter().map(WorkDto::from).collect(),
            projects: p.projects.into_iter().map(ProjectDto::from).collect(),
            ..Self::from_user(p.user)
        }
    }
}

/// `{ accessToken, refreshToken, user }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenUserResponse {
    #[schema(example = "FGfchJHGfkJGC_kgjkvKGCKJc.HVKUyfkj...")]
    pub access_token: String,
    #[schema(example = "FGfchJHGfkJGC_kgjkvKGCKJc.HVKUyfkj...")]
    pub refresh_token: String,
    pub user: UserResponse,
}

impl From<AuthResult> for TokenUserResponse {
    fn from(r: AuthResult) -> Self {
        Self {
            access_token: r.tokens.access_token,
            refresh_token: r.tokens.refresh_token,
            user: UserResponse::from(r.profile),
        }
    }
}

/// `{ user }`; profile mutations do not hand out tokens
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserOnlyResponse {
    pub user: UserResponse,
}

impl From<AuthResult> for UserOnlyResponse {
    fn from(r: AuthResult) -> Self {
        Self {
            user: UserResponse::from(r.profile),
        }
    }
}
