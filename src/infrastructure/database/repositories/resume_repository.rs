use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};

use super::user_repository::db_err;
use crate::domain::{
    DomainError, DomainResult, Education, NewEducation, NewProject, NewWork, Project,
    ResumeRepositoryInterface, Work,
};
use crate::infrastructure::database::entities::{education, project, work};

pub struct ResumeRepository {
    db: DatabaseConnection,
}

impl ResumeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn education_to_domain(m: education::Model) -> Education {
    Education {
        id: m.id,
        user_id: m.user_id,
        position: m.position,
        school_name: m.school_name,
        start_date: m.start_date,
        end_date: m.end_date,
        address: m.address,
        created_at: m.created_at,
    }
}

pub(crate) fn work_to_domain(m: work::Model) -> Work {
    Work {
        id: m.id,
        user_id: m.user_id,
        position: m.position,
        company_name: m.company_name,
        start_date: m.start_date,
        end_date: m.end_date,
        address: m.address,
        duties: m.duties,
        created_at: m.created_at,
    }
}

pub(crate) fn project_to_domain(m: project::Model) -> Project {
    Project {
        id: m.id,
        user_id: m.user_id,
        title: m.title,
        stack: m.stack,
        role: m.role,
        description: m.description,
        link: m.link,
        repository: m.repository,
        created_at: m.created_at,
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn section_not_found(entity: &'static str, id: &str) -> DomainError {
    DomainError::NotFound {
        entity,
        field: "id",
        value: id.to_string(),
    }
}

/// An insert whose `user_id` no longer exists trips the foreign key.
fn insert_err(user_id: &str) -> impl Fn(DbErr) -> DomainError + '_ {
    move |e| {
        let orphan = matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
            || e.to_string().contains("FOREIGN KEY");
        if orphan {
            DomainError::user_not_found("id", user_id)
        } else {
            db_err(e)
        }
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl ResumeRepositoryInterface for ResumeRepository {
    async fn add_education(&self, user_id: &str, dto: NewEducation) -> DomainResult<Education> {
        let model = education::ActiveModel {
            id: Set(new_id()),
            user_id: Set(user_id.to_string()),
            position: Set(dto.position),
            school_name: Set(dto.school_name),
            start_date: Set(dto.start_date),
            end_date: Set(dto.end_date),
            address: Set(dto.address),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(insert_err(user_id))?;

        Ok(education_to_domain(model))
    }

    async fn list_educations(&self, user_id: &str) -> DomainResult<Vec<Education>> {
        let models = education::Entity::find()
            .filter(education::Column::UserId.eq(user_id))
            .order_by_asc(education::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(education_to_domain).collect())
    }

    async fn delete_education(&self, user_id: &str, id: &str) -> DomainResult<()> {
        let result = education::Entity::delete_many()
            .filter(education::Column::Id.eq(id))
            .filter(education::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(section_not_found("Education", id));
        }
        Ok(())
    }

    async fn add_work(&self, user_id: &str, dto: NewWork) -> DomainResult<Work> {
        let model = work::ActiveModel {
            id: Set(new_id()),
            user_id: Set(user_id.to_string()),
            position: Set(dto.position),
            company_name: Set(dto.company_name),
            start_date: Set(dto.start_date),
            end_date: Set(dto.end_date),
            address: Set(dto.address),
            duties: Set(dto.duties),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(insert_err(user_id))?;

        Ok(work_to_domain(model))
    }

    async fn list_works(&self, user_id: &str) -> DomainResult<Vec<Work>> {
        let models = work::Entity::find()
            .filter(work::Column::UserId.eq(user_id))
            .order_by_asc(work::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(work_to_domain).collect())
    }

    async fn delete_work(&self, user_id: &str, id: &str) -> DomainResult<()> {
        let result = work::Entity::delete_many()
            .filter(work::Column::Id.eq(id))
            .filter(work::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(section_not_found("Work", id));
        }
        Ok(())
    }

    async fn add_project(&self, user_id: &str, dto: NewProject) -> DomainResult<Project> {
        let model = project::ActiveModel {
            id: Set(new_id()),
            user_id: Set(user_id.to_string()),
            title: Set(dto.title),
            stack: Set(dto.stack),
            role: Set(dto.role),
            description: Set(dto.description),
            link: Set(dto.link),
            repository: Set(dto.repository),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(insert_err(user_id))?;

        Ok(project_to_domain(model))
    }

    async fn list_projects(&self, user_id: &str) -> DomainResult<Vec<Project>> {
        let models = project::Entity::find()
            .filter(project::Column::UserId.eq(user_id))
            .order_by_asc(project::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(project_to_domain).collect())
    }

    async fn delete_project(&self, user_id: &str, id: &str) -> DomainResult<()> {
        let result = project::Entity::delete_many()
            .filter(project::Column::Id.eq(id))
            .filter(project::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(section_not_found("Project", id));
        }
        Ok(())
    }
}
