use super::*;

/// Tests listing a user's uploads with pagination.
///
/// Expected: Ok with pages scoped to the uploader and true totals
#[tokio::test]
async fn paginates_uploads_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(MediaFile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    for _ in 0..5 {
        factory::create_media_file(db, uploader.id).await?;
    }
    let other = factory::create_user(db).await?;
    factory::create_media_file(db, other.id).await?;

    let repo = MediaFileRepository::new(db);
    let (files, total, total_pages) = repo.get_by_uploader(uploader.id, 0, 2).await?;

    assert_eq!(files.len(), 2);
    assert_eq!(total, 5);
    assert_eq!(total_pages, 3);
    for file in &files {
        assert_eq!(file.uploader_id, uploader.id);
    }

    let (last_page, _, _) = repo.get_by_uploader(uploader.id, 2, 2).await?;
    assert_eq!(last_page.len(), 1);

    Ok(())
}
