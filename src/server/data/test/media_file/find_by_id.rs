use super::*;

/// Tests looking up a media record by its stored name.
///
/// Expected: Ok(Some) for an existing record, Ok(None) otherwise
#[tokio::test]
async fn finds_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(MediaFile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_media_file(db, user.id).await?;

    let repo = MediaFileRepository::new(db);

    let media = repo.find_by_id(&created.id).await?;
    let media = media.expect("record should exist");
    assert_eq!(media.id, created.id);
    assert_eq!(media.uploader_id, user.id);

    assert!(repo.find_by_id("missing.png").await?.is_none());

    Ok(())
}
