use super::*;

/// Tests listing attachment paths for a complaint.
///
/// Expected: Ok with paths in upload order, excluding other complaints
#[tokio::test]
async fn returns_paths_in_upload_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = factory::create_complaint(db, "jane@example.com").await?;
    let other = factory::create_complaint(db, "jane@example.com").await?;

    let repo = AttachmentRepository::new(db);
    repo.create(&complaint.complaint_id, "uploads/1_a.png").await?;
    repo.create(&complaint.complaint_id, "uploads/2_b.pdf").await?;
    repo.create(&other.complaint_id, "uploads/3_c.png").await?;

    let paths = repo.get_paths_by_complaint(&complaint.complaint_id).await?;

    assert_eq!(paths, vec!["uploads/1_a.png", "uploads/2_b.pdf"]);

    Ok(())
}
