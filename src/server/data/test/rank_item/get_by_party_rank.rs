use super::*;

/// Tests listing a contest's entries in submission order.
///
/// Expected: Ok with only that contest's entries, oldest first
#[tokio::test]
async fn lists_items_in_submission_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    let first = factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    let second = factory::create_rank_item(db, party_rank.id, users[1].id).await?;

    let (other_creator, other) = factory::helpers::create_party_rank_with_creator(db).await?;
    factory::create_rank_item(db, other.id, other_creator.id).await?;

    let repo = RankItemRepository::new(db);
    let items = repo.get_by_party_rank(party_rank.id).await?;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, first.id);
    assert_eq!(items[1].id, second.id);

    Ok(())
}
