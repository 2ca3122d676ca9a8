use super::*;

/// Tests listing comments on a complaint.
///
/// Expected: Ok with comments oldest first and author types preserved
#[tokio::test]
async fn returns_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = factory::create_complaint(db, "jane@example.com").await?;

    let repo = CommentRepository::new(db);
    repo.create(CreateCommentParam {
        complaint_id: complaint.complaint_id.clone(),
        author_email: "jane@example.com".to_string(),
        author_type: AuthorType::User,
        message: "Where is my refund?".to_string(),
    })
    .await?;
    repo.create(CreateCommentParam {
        complaint_id: complaint.complaint_id.clone(),
        author_email: "agent@example.com".to_string(),
        author_type: AuthorType::Staff,
        message: "Processing it now".to_string(),
    })
    .await?;

    let comments = repo.get_by_complaint(&complaint.complaint_id).await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].author_type, AuthorType::User);
    assert_eq!(comments[1].author_type, AuthorType::Staff);
    assert_eq!(comments[1].message, "Processing it now");

    Ok(())
}

/// Tests commenting on a complaint that doesn't exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_complaint() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let result = repo
        .create(CreateCommentParam {
            complaint_id: "CMP-MISSING".to_string(),
            author_email: "jane@example.com".to_string(),
            author_type: AuthorType::User,
            message: "Hello".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
