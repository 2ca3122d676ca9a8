use super::*;

/// Tests rating a complaint.
///
/// Expected: Ok and the rating found by complaint ID
#[tokio::test]
async fn creates_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = factory::create_complaint(db, "jane@example.com").await?;

    let repo = RatingRepository::new(db);
    repo.create(param(&complaint.complaint_id, Some("agent@example.com"), 4))
        .await?;

    assert!(repo.exists_for_complaint(&complaint.complaint_id).await?);
    let rating = repo
        .find_by_complaint(&complaint.complaint_id)
        .await?
        .unwrap();
    assert_eq!(rating.rating, 4);
    assert_eq!(rating.staff_email.as_deref(), Some("agent@example.com"));

    Ok(())
}

/// Tests rating the same complaint twice.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn fails_for_second_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = factory::create_complaint(db, "jane@example.com").await?;

    let repo = RatingRepository::new(db);
    repo.create(param(&complaint.complaint_id, None, 5)).await?;
    let result = repo.create(param(&complaint.complaint_id, None, 1)).await;

    assert!(result.is_err());

    Ok(())
}
