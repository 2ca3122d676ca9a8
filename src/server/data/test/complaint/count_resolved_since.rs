use super::*;

/// Tests counting complaints resolved since a point in time.
///
/// Expected: Ok counting RESOLVED complaints updated at or after the bound
#[tokio::test]
async fn counts_recently_resolved() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    ComplaintFactory::new(db, "jane@example.com")
        .status("RESOLVED")
        .updated_at(now)
        .build()
        .await?;
    ComplaintFactory::new(db, "jane@example.com")
        .status("RESOLVED")
        .updated_at(now - Duration::days(3))
        .build()
        .await?;
    ComplaintFactory::new(db, "jane@example.com")
        .status("PENDING")
        .updated_at(now)
        .build()
        .await?;

    let repo = ComplaintRepository::new(db);
    let count = repo.count_resolved_since(now - Duration::hours(1)).await?;

    assert_eq!(count, 1);

    Ok(())
}
