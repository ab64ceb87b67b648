use super::*;

/// Tests recording a stored upload.
///
/// Expected: Ok with the record carrying the caller-chosen ID
#[tokio::test]
async fn creates_media_file_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(MediaFile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = MediaFileRepository::new(db);
    let media = repo
        .create(CreateMediaFileParam {
            id: "0d9f8a2b.mp3".to_string(),
            uploader_id: user.id,
            file_name: "demo-track.mp3".to_string(),
            content_type: "audio/mpeg".to_string(),
            size_bytes: 2_048_576,
        })
        .await?;

    assert_eq!(media.id, "0d9f8a2b.mp3");
    assert_eq!(media.uploader_id, user.id);
    assert_eq!(media.file_name, "demo-track.mp3");
    assert_eq!(media.content_type, "audio/mpeg");
    assert_eq!(media.size_bytes, 2_048_576);

    Ok(())
}

/// Tests recording an upload for a user that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_nonexistent_uploader() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(MediaFile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MediaFileRepository::new(db);
    let result = repo
        .create(CreateMediaFileParam {
            id: "orphan.png".to_string(),
            uploader_id: 999999,
            file_name: "orphan.png".to_string(),
            content_type: "image/png".to_string(),
            size_bytes: 512,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
