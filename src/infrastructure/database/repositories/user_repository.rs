use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use super::resume_repository::{education_to_domain, project_to_domain, work_to_domain};
use crate::domain::{
    CreateUserDto, DomainError, DomainResult, UpdateUserDto, User, UserProfile,
    UserRepositoryInterface,
};
use crate::infrastructure::database::entities::{education, project, user, work};
use crate::shared::InfraError;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        first_name: model.first_name,
        first_name_ua: model.first_name_ua,
        last_name: model.last_name,
        last_name_ua: model.last_name_ua,
        phone: model.phone,
        position: model.position,
        resume: model.resume,
        english_level: model.english_level,
        ukraine_langue: model.ukraine_langue,
        russian_langue: model.russian_langue,
        about_me: model.about_me,
        about_me_ua: model.about_me_ua,
        telegram: model.telegram,
        linkedin: model.linkedin,
        github: model.github,
        facebook: model.facebook,
        instagram: model.instagram,
        viber: model.viber,
        whatsapp: model.whatsapp,
        user_agreement: model.user_agreement,
        consent_of_use: model.consent_of_use,
        site_resume: model.site_resume,
        color_schema: model.color_schema,
        sample: model.sample,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    InfraError::Database(e).into()
}

fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    let msg = e.to_string();
    msg.contains("UNIQUE") || msg.contains("duplicate")
}

/// Copy every `Some` field of the patch onto the active model
fn apply_update(active: &mut user::ActiveModel, dto: UpdateUserDto) {
    macro_rules! set_some {
        ($($field:ident),* $(,)?) => {
            $(
                if let Some(value) = dto.$field {
                    active.$field = Set(Some(value));
                }
            )*
        };
    }

    set_some!(
        first_name,
        first_name_ua,
        last_name,
        last_name_ua,
        phone,
        position,
        resume,
        english_level,
        ukraine_langue,
        russian_langue,
        about_me,
        about_me_ua,
        telegram,
        linkedin,
        github,
        facebook,
        instagram,
        viber,
        whatsapp,
        site_resume,
        color_schema,
        sample,
    );

    if let Some(consent) = dto.consent_of_use {
        active.consent_of_use = Set(consent);
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let now = Utc::now();

        let new_user = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            email: Set(dto.email),
            password_hash: Set(dto.password_hash),
            first_name: Set(dto.first_name),
            first_name_ua: Set(None),
            last_name: Set(dto.last_name),
            last_name_ua: Set(None),
            phone: Set(None),
            position: Set(None),
            resume: Set(None),
            english_level: Set(None),
            ukraine_langue: Set(None),
            russian_langue: Set(None),
            about_me: Set(None),
            about_me_ua: Set(None),
            telegram: Set(None),
            linkedin: Set(None),
            github: Set(None),
            facebook: Set(None),
            instagram: Set(None),
            viber: Set(None),
            whatsapp: Set(None),
            user_agreement: Set(dto.user_agreement),
            consent_of_use: Set(false),
            site_resume: Set(None),
            color_schema: Set(None),
            sample: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = new_user.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict("Email already exists".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(user_model_to_domain(model))
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn get_profile(&self, id: &str) -> DomainResult<Option<UserProfile>> {
        let Some(model) = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let educations = education::Entity::find()
            .filter(education::Column::UserId.eq(id))
            .order_by_asc(education::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let works = work::Entity::find()
            .filter(work::Column::UserId.eq(id))
            .order_by_asc(work::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let projects = project::Entity::find()
            .filter(project::Column::UserId.eq(id))
            .order_by_asc(project::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(Some(UserProfile {
            user: user_model_to_domain(model),
            educations: educations.into_iter().map(education_to_domain).collect(),
            works: works.into_iter().map(work_to_domain).collect(),
            projects: projects.into_iter().map(project_to_domain).collect(),
        }))
    }

    async fn update_user(&self, id: &str, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: user::ActiveModel = existing.into();
        apply_update(&mut active, dto);
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(Some(user_model_to_domain(updated)))
    }

    async fn delete_user(&self, id: &str) -> DomainResult<()> {
        // Children go first so the cascade holds even where FK enforcement is off
        let txn = self.db.begin().await.map_err(db_err)?;

        education::Entity::delete_many()
            .filter(education::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        work::Entity::delete_many()
            .filter(work::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        project::Entity::delete_many()
            .filter(project::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let result = user::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::user_not_found("id", id));
        }

        txn.commit().await.map_err(db_err)?;
        info!(user_id = id, "User deleted with all résumé sections");
        Ok(())
    }
}
