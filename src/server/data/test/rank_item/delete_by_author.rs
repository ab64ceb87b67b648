use super::*;

/// Tests removing all of one member's entries.
///
/// Expected: Ok(2) with the other member's entry untouched
#[tokio::test]
async fn deletes_only_the_authors_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    let kept = factory::create_rank_item(db, party_rank.id, users[1].id).await?;

    let repo = RankItemRepository::new(db);
    let removed = repo.delete_by_author(party_rank.id, users[0].id).await?;

    assert_eq!(removed, 2);

    let remaining = repo.get_by_party_rank(party_rank.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

/// Tests removing entries for a member who submitted none.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    let repo = RankItemRepository::new(db);
    let removed = repo.delete_by_author(party_rank.id, creator.id).await?;

    assert_eq!(removed, 0);

    Ok(())
}
