use super::*;

/// Tests listing a customer's complaints.
///
/// Verifies that only the customer's complaints are returned, most recently
/// updated first, and that the limit is applied.
///
/// Expected: Ok with complaints ordered by updated_at descending
#[tokio::test]
async fn returns_most_recently_updated_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = ComplaintFactory::new(db, "jane@example.com")
        .updated_at(now - Duration::days(2))
        .build()
        .await?;
    let recent = ComplaintFactory::new(db, "jane@example.com")
        .updated_at(now)
        .build()
        .await?;
    factory::create_complaint(db, "other@example.com").await?;

    let repo = ComplaintRepository::new(db);
    let all = repo.get_by_user_email("jane@example.com", None).await?;
    let limited = repo.get_by_user_email("jane@example.com", Some(1)).await?;

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].complaint_id, recent.complaint_id);
    assert_eq!(all[1].complaint_id, old.complaint_id);
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].complaint_id, recent.complaint_id);

    Ok(())
}
