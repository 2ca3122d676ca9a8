use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string(User::FullName))
                    .col(string_null(User::PhoneNumber))
                    .col(date_null(User::DateOfBirth))
                    .col(string_null(User::Address))
                    .col(string_null(User::City))
                    .col(string_null(User::State))
                    .col(string_null(User::ZipCode))
                    .col(string_null(User::Country))
                    .col(boolean(User::EmailNotifications).default(true))
                    .col(boolean(User::SmsNotifications).default(false))
                    .col(boolean(User::MarketingEmails).default(false))
                    .col(boolean(User::EmailVerified).default(false))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    PasswordHash,
    FullName,
    PhoneNumber,
    DateOfBirth,
    Address,
    City,
    State,
    ZipCode,
    Country,
    EmailNotifications,
    SmsNotifications,
    MarketingEmails,
    EmailVerified,
    CreatedAt,
    UpdatedAt,
}
