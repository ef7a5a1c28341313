//! Create users table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::FirstName).string())
                    .col(ColumnDef::new(Users::FirstNameUa).string())
                    .col(ColumnDef::new(Users::LastName).string())
                    .col(ColumnDef::new(Users::LastNameUa).string())
                    .col(ColumnDef::new(Users::Phone).string())
                    .col(ColumnDef::new(Users::Position).string())
                    .col(ColumnDef::new(Users::Resume).string())
                    .col(ColumnDef::new(Users::EnglishLevel).string())
                    .col(ColumnDef::new(Users::UkraineLangue).string())
                    .col(ColumnDef::new(Users::RussianLangue).string())
                    .col(ColumnDef::new(Users::AboutMe).text())
                    .col(ColumnDef::new(Users::AboutMeUa).text())
                    .col(ColumnDef::new(Users::Telegram).string())
                    .col(ColumnDef::new(Users::Linkedin).string())
                    .col(ColumnDef::new(Users::Github).string())
                    .col(ColumnDef::new(Users::Facebook).string())
                    .col(ColumnDef::new(Users::Instagram).string())
                    .col(ColumnDef::new(Users::Viber).string())
                    .col(ColumnDef::new(Users::Whatsapp).string())
                    .col(
                        ColumnDef::new(Users::UserAgreement)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::ConsentOfUse)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::SiteResume).string())
                    .col(ColumnDef::new(Users::ColorSchema).string())
                    .col(ColumnDef::new(Users::Sample).string())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    FirstName,
    FirstNameUa,
    LastName,
    LastNameUa,
    Phone,
    Position,
    Resume,
    EnglishLevel,
    UkraineLangue,
    RussianLangue,
    AboutMe,
    AboutMeUa,
    Telegram,
    Linkedin,
    Github,
    Facebook,
    Instagram,
    Viber,
    Whatsapp,
    UserAgreement,
    ConsentOfUse,
    SiteResume,
    ColorSchema,
    Sample,
    CreatedAt,
    UpdatedAt,
}
