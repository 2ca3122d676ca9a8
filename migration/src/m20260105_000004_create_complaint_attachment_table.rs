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
                    .table(ComplaintAttachment::Table)
                    .if_not_exists()
                    .col(pk_auto(ComplaintAttachment::Id))
                    .col(string(ComplaintAttachment::ComplaintId))
                    .col(string(ComplaintAttachment::FilePath))
                    .col(timestamp_with_time_zone(ComplaintAttachment::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_complaint_attachment_complaint_id")
                            .from(ComplaintAttachment::Table, ComplaintAttachment::ComplaintId)
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
            .drop_table(Table::drop().table(ComplaintAttachment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ComplaintAttachment {
    Table,
    Id,
    ComplaintId,
    FilePath,
    CreatedAt,
}
