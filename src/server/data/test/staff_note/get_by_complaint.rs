use super::*;

async fn add_note(
    repo: &StaffNoteRepository<'_>,
    complaint_id: &str,
    note: &str,
    is_internal: bool,
) -> Result<(), DbErr> {
    repo.create(CreateStaffNoteParam {
        complaint_id: complaint_id.to_string(),
        staff_email: "agent@example.com".to_string(),
        note: note.to_string(),
        is_internal,
    })
    .await?;
    Ok(())
}

/// Tests listing all notes on a complaint.
///
/// Expected: Ok with notes newest first
#[tokio::test]
async fn returns_all_notes_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = factory::create_complaint(db, "jane@example.com").await?;

    let repo = StaffNoteRepository::new(db);
    add_note(&repo, &complaint.complaint_id, "first", true).await?;
    add_note(&repo, &complaint.complaint_id, "second", false).await?;

    let notes = repo.get_by_complaint(&complaint.complaint_id, false).await?;

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].note, "second");
    assert_eq!(notes[1].note, "first");

    Ok(())
}

/// Tests listing only internal notes.
///
/// Expected: Ok with the public note excluded
#[tokio::test]
async fn filters_internal_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = factory::create_complaint(db, "jane@example.com").await?;

    let repo = StaffNoteRepository::new(db);
    add_note(&repo, &complaint.complaint_id, "internal", true).await?;
    add_note(&repo, &complaint.complaint_id, "public", false).await?;

    let notes = repo.get_by_complaint(&complaint.complaint_id, true).await?;

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].note, "internal");
    assert!(notes[0].is_internal);

    Ok(())
}
