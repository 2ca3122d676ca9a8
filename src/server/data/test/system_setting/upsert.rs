use super::*;

/// Tests inserting a setting without a category.
///
/// Expected: Ok with the default category
#[tokio::test]
async fn inserts_new_setting_with_default_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SystemSettingRepository::new(db);
    let setting = repo
        .upsert(UpsertSettingParam {
            key: "support_hours".to_string(),
            value: "9-5".to_string(),
            description: None,
            category: None,
        })
        .await?;

    assert_eq!(setting.category, DEFAULT_SETTING_CATEGORY);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests upserting an existing key.
///
/// Verifies that the value changes while the stored description and category
/// are kept when not provided.
///
/// Expected: Ok with one row holding the new value
#[tokio::test]
async fn updates_existing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SystemSettingRepository::new(db);
    let original = repo
        .upsert(UpsertSettingParam {
            key: "priorities".to_string(),
            value: "Low,Medium".to_string(),
            description: Some("Priority names".to_string()),
            category: Some("PRIORITIES".to_string()),
        })
        .await?;

    let updated = repo
        .upsert(UpsertSettingParam {
            key: "priorities".to_string(),
            value: "Low,Medium,High".to_string(),
            description: None,
            category: None,
        })
        .await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.value, "Low,Medium,High");
    assert_eq!(updated.description.as_deref(), Some("Priority names"));
    assert_eq!(updated.category, "PRIORITIES");
    assert_eq!(repo.get_all().await?.len(), 1);
    assert!(repo.find_by_key("priorities").await?.is_some());

    Ok(())
}
