use super::*;

/// Tests reading the history of one entity.
///
/// Expected: Ok with only entries matching both entity type and ID
#[tokio::test]
async fn filters_by_type_and_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuditLogRepository::new(db);
    repo.create(param(AuditAction::StatusChange, AuditEntityType::Complaint, "CMP-1"))
        .await?;
    repo.create(param(AuditAction::Assign, AuditEntityType::Complaint, "CMP-1"))
        .await?;
    repo.create(param(AuditAction::Update, AuditEntityType::Complaint, "CMP-2"))
        .await?;
    repo.create(param(AuditAction::Update, AuditEntityType::User, "CMP-1"))
        .await?;

    let history = repo
        .get_by_entity(AuditEntityType::Complaint, "CMP-1")
        .await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].action, "ASSIGN");
    assert_eq!(history[1].action, "STATUS_CHANGE");

    Ok(())
}
