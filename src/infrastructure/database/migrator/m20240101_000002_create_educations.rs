//! Create educations table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Educations::UserId).string().not_null())
                    .col(ColumnDef::new(Educations::Position).string())
                    .col(ColumnDef::new(Educations::SchoolName).string())
                    .col(ColumnDef::new(Educations::StartDate).string())
                    .col(ColumnDef::new(Educations::EndDate).string())
                    .col(ColumnDef::new(Educations::Address).string())
                    .col(
                        ColumnDef::new(Educations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_educations_user")
                            .from(Educations::Table, Educations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_educations_user_id")
                    .table(Educations::Table)
                    .col(Educations::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Educations {
    Table,
    Id,
    UserId,
    Position,
    SchoolName,
    StartDate,
    EndDate,
    Address,
    CreatedAt,
}
