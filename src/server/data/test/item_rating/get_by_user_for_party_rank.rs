use super::*;

/// Tests fetching one member's ratings scoped to a contest.
///
/// Ratings on another contest's items must not leak in.
///
/// Expected: Ok with only the member's ratings for this contest
#[tokio::test]
async fn scopes_ratings_to_party_rank_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 3).await?;
    let first = factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    let second = factory::create_rank_item(db, party_rank.id, users[1].id).await?;
    factory::create_rating(db, first.id, users[2].id, 3.5).await?;
    factory::create_rating(db, second.id, users[2].id, 9.0).await?;
    factory::create_rating(db, first.id, users[1].id, 6.0).await?;

    let (other_creator, other) = factory::helpers::create_party_rank_with_creator(db).await?;
    let other_item = factory::create_rank_item(db, other.id, other_creator.id).await?;
    factory::create_rating(db, other_item.id, users[2].id, 1.0).await?;

    let repo = ItemRatingRepository::new(db);
    let ratings = repo
        .get_by_user_for_party_rank(party_rank.id, users[2].id)
        .await?;

    assert_eq!(ratings.len(), 2);
    assert_eq!(ratings[0].item_id, first.id);
    assert_eq!(ratings[0].value, 3.5);
    assert_eq!(ratings[1].item_id, second.id);
    assert_eq!(ratings[1].value, 9.0);

    Ok(())
}
