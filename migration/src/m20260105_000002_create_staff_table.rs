use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(pk_auto(Staff::Id))
                    .col(string_uniq(Staff::Email))
                    .col(string(Staff::PasswordHash))
                    .col(string(Staff::FirstName))
                    .col(string(Staff::LastName))
                    .col(string_null(Staff::Phone))
                    .col(string(Staff::Role).default("STAFF"))
                    .col(string_null(Staff::Department))
                    .col(integer(Staff::Workload).default(0))
                    .col(timestamp_with_time_zone(Staff::CreatedAt))
                    .col(timestamp_with_time_zone(Staff::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Staff {
    Table,
    Id,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    Phone,
    Role,
    Department,
    Workload,
    CreatedAt,
    UpdatedAt,
}
