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
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(string(Comment::ComplaintId))
                    .col(string(Comment::AuthorEmail))
                    .col(string(Comment::AuthorType))
                    .col(text(Comment::Message))
                    .col(timestamp_with_time_zone(Comment::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_complaint_id")
                            .from(Comment::Table, Comment::ComplaintId)
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
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    ComplaintId,
    AuthorEmail,
    AuthorType,
    Message,
    CreatedAt,
}
