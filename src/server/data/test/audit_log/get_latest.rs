use super::*;

/// Tests reading the latest audit entries.
///
/// Expected: Ok with entries newest first and the limit applied
#[tokio::test]
async fn returns_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuditLogRepository::new(db);
    for id in ["1", "2", "3"] {
        repo.create(param(AuditAction::Create, AuditEntityType::User, id))
            .await?;
    }

    let all = repo.get_latest(None).await?;
    let latest = repo.get_latest(Some(2)).await?;

    assert_eq!(all.len(), 3);
    assert_eq!(all[0].entity_id, "3");
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[1].entity_id, "2");
    assert_eq!(latest[0].action, "CREATE");
    assert_eq!(latest[0].ip_address.as_deref(), Some("127.0.0.1"));

    Ok(())
}
