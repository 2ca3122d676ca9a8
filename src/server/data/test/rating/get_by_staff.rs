use super::*;

/// Tests listing ratings attributed to one staff member.
///
/// Expected: Ok with only that staff member's ratings
#[tokio::test]
async fn returns_ratings_for_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_complaint(db, "jane@example.com").await?;
    let second = factory::create_complaint(db, "jane@example.com").await?;
    let third = factory::create_complaint(db, "jane@example.com").await?;

    let repo = RatingRepository::new(db);
    repo.create(param(&first.complaint_id, Some("agent@example.com"), 5))
        .await?;
    repo.create(param(&second.complaint_id, Some("agent@example.com"), 3))
        .await?;
    repo.create(param(&third.complaint_id, Some("other@example.com"), 1))
        .await?;

    let ratings = repo.get_by_staff("agent@example.com").await?;

    assert_eq!(ratings.len(), 2);
    assert!(ratings.iter().all(|r| r.staff_email.as_deref() == Some("agent@example.com")));

    Ok(())
}
