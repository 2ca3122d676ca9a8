use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_complaint_table::Complaint;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rating::Table)
                    .if_not_exists()
                    .col(pk_auto(Rating::Id))
                    .col(string_uniq(Rating::ComplaintId))
                    .col(string(Rating::UserEmail))
                    .col(string_null(Rating::StaffEmail))
                    .col(integer(Rating::Rating))
                    .col(text_null(Rating::Feedback))
                    .col(timestamp_with_time_zone(Rating::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_complaint_id")
                            .from(Rating::Table, Rating::ComplaintId)
                            .to(Complaint::Table, Complaint::ComplaintId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rating {
    Table,
    Id,
    ComplaintId,
    UserEmail,
    StaffEmail,
    Rating,
    Feedback,
    CreatedAt,
}
