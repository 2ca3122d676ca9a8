use super::*;

/// Tests assigning a complaint to a staff member.
///
/// Expected: Ok(Some) with assignee set and listed in the assignee's queue
#[tokio::test]
async fn assigns_complaint() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = factory::create_complaint(db, "jane@example.com").await?;

    let repo = ComplaintRepository::new(db);
    let updated = repo
        .assign(&complaint.complaint_id, "agent@example.com")
        .await?
        .unwrap();

    assert_eq!(updated.assigned_to.as_deref(), Some("agent@example.com"));

    let queue = repo.get_by_assignee("agent@example.com", None).await?;
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].complaint_id, complaint.complaint_id);

    Ok(())
}
