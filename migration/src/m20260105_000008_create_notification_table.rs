use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(string(Notification::UserEmail))
                    .col(string(Notification::Title))
                    .col(text(Notification::Message))
                    .col(string(Notification::NotificationType).default("INFO"))
                    .col(boolean(Notification::IsRead).default(false))
                    .col(timestamp_with_time_zone(Notification::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notification_user_email")
                    .table(Notification::Table)
                    .col(Notification::UserEmail)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    UserEmail,
    Title,
    Message,
    NotificationType,
    IsRead,
    CreatedAt,
}
