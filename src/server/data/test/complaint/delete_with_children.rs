use super::*;
use crate::server::{
    data::{attachment::AttachmentRepository, comment::CommentRepository},
    model::comment::{AuthorType, CreateCommentParam},
};

/// Tests deleting a complaint with dependent rows.
///
/// Verifies that attachments and comments are removed together with the complaint.
///
/// Expected: Ok(true) and no remaining child rows
#[tokio::test]
async fn deletes_complaint_and_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = factory::create_complaint(db, "jane@example.com").await?;
    AttachmentRepository::new(db)
        .create(&complaint.complaint_id, "uploads/a.png")
        .await?;
    CommentRepository::new(db)
        .create(CreateCommentParam {
            complaint_id: complaint.complaint_id.clone(),
            author_email: "jane@example.com".to_string(),
            author_type: AuthorType::User,
            message: "Any update?".to_string(),
        })
        .await?;

    let repo = ComplaintRepository::new(db);
    assert!(repo.delete_with_children(&complaint.complaint_id).await?);

    assert!(!repo.exists(&complaint.complaint_id).await?);
    let attachments = entity::prelude::ComplaintAttachment::find().all(db).await?;
    let comments = entity::prelude::Comment::find().all(db).await?;
    assert!(attachments.is_empty());
    assert!(comments.is_empty());

    Ok(())
}

/// Tests deleting an unknown complaint.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_complaint() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComplaintRepository::new(db);
    assert!(!repo.delete_with_children("CMP-MISSING").await?);

    Ok(())
}
