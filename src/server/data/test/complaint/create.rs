use super::*;

fn param(complaint_id: &str, priority: Option<&str>) -> CreateComplaintParam {
    CreateComplaintParam {
        complaint_id: complaint_id.to_string(),
        user_email: "jane@example.com".to_string(),
        order_id: "ORD-1".to_string(),
        order_date: None,
        issue_type: "Late Delivery".to_string(),
        title: Some("Still waiting".to_string()),
        description: "Order is a week late".to_string(),
        status: ComplaintStatus::Pending,
        priority: priority.map(str::to_string),
        contact_phone: None,
        expected_resolution: None,
        assigned_to: None,
    }
}

/// Tests creating a complaint.
///
/// Verifies that the priority level is derived from the priority name and both
/// timestamps are set.
///
/// Expected: Ok with PENDING complaint and priority level 3
#[tokio::test]
async fn creates_complaint_with_priority_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComplaintRepository::new(db);
    let complaint = repo.create(param("CMP-100", Some("High"))).await?;

    assert_eq!(complaint.complaint_id, "CMP-100");
    assert_eq!(complaint.status, ComplaintStatus::Pending);
    assert_eq!(complaint.priority_level, 3);
    assert_eq!(complaint.created_at, complaint.updated_at);
    assert!(repo.exists("CMP-100").await?);

    Ok(())
}

/// Tests creating a complaint with a complaint ID that is already taken.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn fails_for_duplicate_complaint_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComplaintRepository::new(db);
    repo.create(param("CMP-100", None)).await?;
    let result = repo.create(param("CMP-100", None)).await;

    assert!(result.is_err());

    Ok(())
}
