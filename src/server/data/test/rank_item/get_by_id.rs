use super::*;

/// Tests fetching an entry by ID.
///
/// Expected: Ok(Some) for an existing entry, Ok(None) otherwise
#[tokio::test]
async fn finds_existing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;
    let created = factory::create_rank_item(db, party_rank.id, creator.id).await?;

    let repo = RankItemRepository::new(db);

    let item = repo.get_by_id(created.id).await?;
    let item = item.expect("item should exist");
    assert_eq!(item.id, created.id);
    assert_eq!(item.name, created.name);

    assert!(repo.get_by_id(999999).await?.is_none());

    Ok(())
}

/// Tests fetching an entry whose stored media kind is not recognized.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unknown_media_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;
    let created = factory::rank_item::RankItemFactory::new(db, party_rank.id, creator.id)
        .media_kind("gif")
        .build()
        .await?;

    let repo = RankItemRepository::new(db);
    let result = repo.get_by_id(created.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
