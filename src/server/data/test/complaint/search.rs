use super::*;

/// Tests the complaint ID filter.
///
/// Expected: Ok with case-insensitive substring matches only
#[tokio::test]
async fn filters_by_complaint_id_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ComplaintFactory::new(db, "jane@example.com")
        .complaint_id("CMP-1001")
        .build()
        .await?;
    ComplaintFactory::new(db, "jane@example.com")
        .complaint_id("CMP-2002")
        .build()
        .await?;

    let repo = ComplaintRepository::new(db);
    let result = repo
        .search(ComplaintSearchParam {
            user_email: "jane@example.com".to_string(),
            complaint_id: Some("cmp-10".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].complaint_id, "CMP-1001");

    Ok(())
}

/// Tests complaint ID filters made of `LIKE` wildcard characters.
///
/// Expected: Ok with no matches, wildcards are compared literally
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ComplaintFactory::new(db, "jane@example.com")
        .complaint_id("CMP-1001")
        .build()
        .await?;

    let repo = ComplaintRepository::new(db);
    for needle in ["_", "%", "CMP_1001", "CMP%1001", "\\"] {
        let result = repo
            .search(ComplaintSearchParam {
                user_email: "jane@example.com".to_string(),
                complaint_id: Some(needle.to_string()),
                ..Default::default()
            })
            .await?;

        assert!(result.is_empty(), "{} should not match", needle);
    }

    Ok(())
}

/// Tests the status filter with a lowercase status.
///
/// Expected: Ok with only RESOLVED complaints
#[tokio::test]
async fn filters_by_status_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ComplaintFactory::new(db, "jane@example.com")
        .status("RESOLVED")
        .build()
        .await?;
    ComplaintFactory::new(db, "jane@example.com")
        .status("PENDING")
        .build()
        .await?;

    let repo = ComplaintRepository::new(db);
    let result = repo
        .search(ComplaintSearchParam {
            user_email: "jane@example.com".to_string(),
            status: Some("resolved".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].status, ComplaintStatus::Resolved);

    Ok(())
}

/// Tests exclusive creation date bounds.
///
/// Expected: Ok with only the complaint strictly inside the window
#[tokio::test]
async fn filters_by_creation_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    ComplaintFactory::new(db, "jane@example.com")
        .created_at(now - Duration::days(10))
        .build()
        .await?;
    let inside = ComplaintFactory::new(db, "jane@example.com")
        .created_at(now - Duration::days(5))
        .build()
        .await?;
    ComplaintFactory::new(db, "jane@example.com")
        .created_at(now)
        .build()
        .await?;

    let repo = ComplaintRepository::new(db);
    let result = repo
        .search(ComplaintSearchParam {
            user_email: "jane@example.com".to_string(),
            created_after: Some(now - Duration::days(7)),
            created_before: Some(now - Duration::days(1)),
            ..Default::default()
        })
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].complaint_id, inside.complaint_id);

    Ok(())
}

/// Tests that search never returns another customer's complaints.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn scopes_to_user_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_complaint(db, "other@example.com").await?;

    let repo = ComplaintRepository::new(db);
    let result = repo
        .search(ComplaintSearchParam {
            user_email: "jane@example.com".to_string(),
            ..Default::default()
        })
        .await?;

    assert!(result.is_empty());

    Ok(())
}
