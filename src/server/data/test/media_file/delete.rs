use super::*;

/// Tests deleting a media record.
///
/// Expected: Ok(true) on the first delete, Ok(false) once it is gone
#[tokio::test]
async fn deletes_record_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(MediaFile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let media = factory::create_media_file(db, user.id).await?;

    let repo = MediaFileRepository::new(db);

    assert!(repo.delete(&media.id).await?);
    assert!(repo.find_by_id(&media.id).await?.is_none());
    assert!(!repo.delete(&media.id).await?);

    Ok(())
}
