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
                    .table(StaffNote::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffNote::Id))
                    .col(string(StaffNote::ComplaintId))
                    .col(string(StaffNote::StaffEmail))
                    .col(text(StaffNote::Note))
                    .col(boolean(StaffNote::IsInternal).default(true))
                    .col(timestamp_with_time_zone(StaffNote::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_note_complaint_id")
                            .from(StaffNote::Table, StaffNote::ComplaintId)
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
            .drop_table(Table::drop().table(StaffNote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaffNote {
    Table,
    Id,
    ComplaintId,
    StaffEmail,
    Note,
    IsInternal,
    CreatedAt,
}
