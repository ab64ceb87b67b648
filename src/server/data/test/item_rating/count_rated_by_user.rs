use super::*;

/// Tests counting how many items a member has rated in a contest.
///
/// Expected: Ok with counts scoped to the contest
#[tokio::test]
async fn counts_rated_items_per_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 3).await?;
    let first = factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    let second = factory::create_rank_item(db, party_rank.id, users[1].id).await?;
    factory::create_rating(db, first.id, users[2].id, 5.0).await?;
    factory::create_rating(db, second.id, users[2].id, 6.5).await?;
    factory::create_rating(db, first.id, users[1].id, 8.0).await?;

    let repo = ItemRatingRepository::new(db);

    assert_eq!(repo.count_rated_by_user(party_rank.id, users[2].id).await?, 2);
    assert_eq!(repo.count_rated_by_user(party_rank.id, users[1].id).await?, 1);
    assert_eq!(repo.count_rated_by_user(party_rank.id, users[0].id).await?, 0);

    Ok(())
}
