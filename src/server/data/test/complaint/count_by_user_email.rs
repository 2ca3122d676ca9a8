use super::*;

/// Tests status counts for one customer.
///
/// Expected: Ok with totals per status, ignoring other customers
#[tokio::test]
async fn counts_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for status in ["PENDING", "PENDING", "IN_PROGRESS", "RESOLVED"] {
        ComplaintFactory::new(db, "jane@example.com")
            .status(status)
            .build()
            .await?;
    }
    factory::create_complaint(db, "other@example.com").await?;

    let repo = ComplaintRepository::new(db);
    let counts = repo.count_by_user_email("jane@example.com").await?;

    assert_eq!(counts.total, 4);
    assert_eq!(counts.pending, 2);
    assert_eq!(counts.in_progress, 1);
    assert_eq!(counts.resolved, 1);

    let all = repo.count_all().await?;
    assert_eq!(all.total, 5);

    Ok(())
}

/// Tests status counts for an assignee.
///
/// Expected: Ok counting only complaints assigned to that staff email
#[tokio::test]
async fn counts_by_assignee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ComplaintFactory::new(db, "jane@example.com")
        .assigned_to("agent@example.com")
        .status("RESOLVED")
        .build()
        .await?;
    ComplaintFactory::new(db, "jane@example.com")
        .assigned_to("agent@example.com")
        .build()
        .await?;
    factory::create_complaint(db, "jane@example.com").await?;

    let repo = ComplaintRepository::new(db);
    let counts = repo.count_by_assignee("agent@example.com").await?;

    assert_eq!(counts.total, 2);
    assert_eq!(counts.resolved, 1);
    assert_eq!(counts.pending, 1);

    Ok(())
}
