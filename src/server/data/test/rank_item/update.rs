use super::*;

/// Tests editing an entry's fields.
///
/// Expected: Ok with the new values replacing the old ones
#[tokio::test]
async fn replaces_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;
    let created = factory::rank_item::RankItemFactory::new(db, party_rank.id, creator.id)
        .comment(Some("First pick".to_string()))
        .build()
        .await?;

    let repo = RankItemRepository::new(db);
    let updated = repo
        .update(UpdateRankItemParam {
            id: created.id,
            name: "Final pick".to_string(),
            comment: None,
            media_kind: MediaKind::Audio,
            media_url: "/media/final.mp3".to_string(),
            start_seconds: Some(10),
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Final pick");
    assert!(updated.comment.is_none());
    assert_eq!(updated.media_kind, MediaKind::Audio);
    assert_eq!(updated.media_url, "/media/final.mp3");
    assert_eq!(updated.start_seconds, Some(10));
    assert_eq!(updated.author_id, creator.id);

    Ok(())
}

/// Tests editing an entry that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RankItemRepository::new(db);
    let result = repo
        .update(UpdateRankItemParam {
            id: 999999,
            name: "Ghost".to_string(),
            comment: None,
            media_kind: MediaKind::Video,
            media_url: "/media/ghost.mp4".to_string(),
            start_seconds: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
