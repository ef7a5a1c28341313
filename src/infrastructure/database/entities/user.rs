//! User entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// User model. Profile columns are nullable; the HTTP layer validates them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
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

    #[sea_orm(column_type = "Text", nullable)]
    pub about_me: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::education::Entity")]
    Educations,
    #[sea_orm(has_many = "super::work::Entity")]
    Works,
    #[sea_orm(has_many = "super::project::Entity")]
    Projects,
}

impl Related<super::education::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Educations.def()
    }
}

impl Related<super::work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Works.def()
    }
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
