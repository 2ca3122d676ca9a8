use super::*;

/// Tests changing a complaint's status.
///
/// Expected: Ok(Some) with the new status and a refreshed updated_at
#[tokio::test]
async fn updates_status_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = ComplaintFactory::new(db, "jane@example.com")
        .updated_at(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let repo = ComplaintRepository::new(db);
    let updated = repo
        .update_status(&complaint.complaint_id, ComplaintStatus::Resolved)
        .await?
        .unwrap();

    assert_eq!(updated.status, ComplaintStatus::Resolved);
    assert!(updated.updated_at > complaint.updated_at);

    Ok(())
}

/// Tests reopening a resolved complaint.
///
/// Expected: Ok(Some) with status back to PENDING
#[tokio::test]
async fn allows_any_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = ComplaintFactory::new(db, "jane@example.com")
        .status("RESOLVED")
        .build()
        .await?;

    let repo = ComplaintRepository::new(db);
    let updated = repo
        .update_status(&complaint.complaint_id, ComplaintStatus::Pending)
        .await?
        .unwrap();

    assert_eq!(updated.status, ComplaintStatus::Pending);

    Ok(())
}

/// Tests updating an unknown complaint.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_complaint() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComplaintRepository::new(db);
    let result = repo
        .update_status("CMP-MISSING", ComplaintStatus::Resolved)
        .await?;

    assert!(result.is_none());

    Ok(())
}
