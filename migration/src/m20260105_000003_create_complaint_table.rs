use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Complaint::Table)
                    .if_not_exists()
                    .col(pk_auto(Complaint::Id))
                    .col(string_uniq(Complaint::ComplaintId))
                    .col(string(Complaint::UserEmail))
                    .col(string(Complaint::OrderId))
                    .col(date_null(Complaint::OrderDate))
                    .col(string(Complaint::IssueType))
                    .col(string_null(Complaint::Title))
                    .col(text(Complaint::Description))
                    .col(string(Complaint::Status).default("PENDING"))
                    .col(string_null(Complaint::Priority))
                    .col(integer(Complaint::PriorityLevel).default(0))
                    .col(string_null(Complaint::ContactPhone))
                    .col(string_null(Complaint::ExpectedResolution))
                    .col(string_null(Complaint::AssignedTo))
                    .col(timestamp_with_time_zone(Complaint::CreatedAt))
                    .col(timestamp_with_time_zone(Complaint::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_complaint_user_email")
                    .table(Complaint::Table)
                    .col(Complaint::UserEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_complaint_assigned_to")
                    .table(Complaint::Table)
                    .col(Complaint::AssignedTo)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Complaint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Complaint {
    Table,
    Id,
    ComplaintId,
    UserEmail,
    OrderId,
    OrderDate,
    IssueType,
    Title,
    Description,
    Status,
    Priority,
    PriorityLevel,
    ContactPhone,
    ExpectedResolution,
    AssignedTo,
    CreatedAt,
    UpdatedAt,
}
