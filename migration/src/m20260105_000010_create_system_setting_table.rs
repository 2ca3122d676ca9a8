use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SystemSetting::Table)
                    .if_not_exists()
                    .col(pk_auto(SystemSetting::Id))
                    .col(string_uniq(SystemSetting::Key))
                    .col(text(SystemSetting::Value))
                    .col(string_null(SystemSetting::Description))
                    .col(string(SystemSetting::Category).default("GENERAL"))
                    .col(timestamp_with_time_zone(SystemSetting::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SystemSetting {
    Table,
    Id,
    Key,
    Value,
    Description,
    Category,
    UpdatedAt,
}
