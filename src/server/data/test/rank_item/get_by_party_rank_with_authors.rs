use super::*;

/// Tests listing entries joined with their authors.
///
/// Expected: Ok with each entry paired with the submitting user
#[tokio::test]
async fn pairs_items_with_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    factory::create_rank_item(db, party_rank.id, users[1].id).await?;

    let repo = RankItemRepository::new(db);
    let items = repo.get_by_party_rank_with_authors(party_rank.id).await?;

    assert_eq!(items.len(), 2);
    for (item, author) in &items {
        assert_eq!(item.author_id, author.id);
    }
    assert_eq!(items[0].1.username, users[0].username);
    assert_eq!(items[1].1.username, users[1].username);

    Ok(())
}
