use chrono::{DateTime, Utc};

use crate::domain::resume::{Education, Project, Work};

/// User account with its public profile fields
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,

    pub first_name: Option<String>,
    pub first_name_ua: Option<String>,
    pub last_name: Option<String>,
    pub last_name_ua: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub resume: Option<String>,

    pub english_level: Option<String>,
    pub ukraine_langue: Option<String>,
    pub russian_langue: Option<String>,

    pub about_me: Option<String>,
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

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user together with every résumé section they own
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub educations: Vec<Education>,
    pub works: Vec<Work>,
    pub projects: Vec<Project>,
}
