//! Create works table

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
                    .table(Works::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Works::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Works::UserId).string().not_null())
                    .col(ColumnDef::new(Works::Position).string())
                    .col(ColumnDef::new(Works::CompanyName).string())
                    .col(ColumnDef::new(Works::StartDate).string())
                    .col(ColumnDef::new(Works::EndDate).string())
                    .col(ColumnDef::new(Works::Address).string())
                    .col(ColumnDef::new(Works::Duties).text())
                    .col(
                        ColumnDef::new(Works::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_works_user")
                            .from(Works::Table, Works::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_works_user_id")
                    .table(Works::Table)
                    .col(Works::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Works::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Works {
    Table,
    Id,
    UserId,
    Position,
    CompanyName,
    StartDate,
    EndDate,
    Address,
    Duties,
    CreatedAt,
}
