use super::*;

/// Tests the contest-wide and per-author item counts.
///
/// Expected: Ok with counts scoped to the contest and author respectively
#[tokio::test]
async fn counts_items_by_party_rank_and_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    factory::create_rank_item(db, party_rank.id, users[1].id).await?;

    let repo = RankItemRepository::new(db);

    assert_eq!(repo.count_by_party_rank(party_rank.id).await?, 3);
    assert_eq!(repo.count_by_author(party_rank.id, users[0].id).await?, 2);
    assert_eq!(repo.count_by_author(party_rank.id, users[1].id).await?, 1);
    assert_eq!(repo.count_by_party_rank(999999).await?, 0);

    Ok(())
}
