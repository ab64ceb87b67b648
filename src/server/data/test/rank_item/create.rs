use super::*;

/// Tests submitting a new entry.
///
/// Expected: Ok with every field stored as submitted
#[tokio::test]
async fn creates_rank_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    let repo = RankItemRepository::new(db);
    let item = repo
        .create(CreateRankItemParam {
            party_rank_id: party_rank.id,
            author_id: creator.id,
            name: "Take On Me".to_string(),
            comment: Some("The synth line carries it".to_string()),
            media_kind: MediaKind::Youtube,
            media_url: "https://www.youtube.com/watch?v=djV11Xbc914".to_string(),
            start_seconds: Some(48),
        })
        .await?;

    assert_eq!(item.party_rank_id, party_rank.id);
    assert_eq!(item.author_id, creator.id);
    assert_eq!(item.name, "Take On Me");
    assert_eq!(item.comment.as_deref(), Some("The synth line carries it"));
    assert_eq!(item.media_kind, MediaKind::Youtube);
    assert_eq!(item.start_seconds, Some(48));

    Ok(())
}

/// Tests submitting an entry to a party rank that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_nonexistent_party_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = RankItemRepository::new(db);
    let result = repo
        .create(CreateRankItemParam {
            party_rank_id: 999999,
            author_id: user.id,
            name: "Orphaned".to_string(),
            comment: None,
            media_kind: MediaKind::Image,
            media_url: "/media/orphan.png".to_string(),
            start_seconds: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
