use super::*;

/// Tests fetching every rating of a contest with the rating users attached.
///
/// Expected: Ok with (rating, user) pairs grouped by item
#[tokio::test]
async fn pairs_ratings_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 3).await?;
    let item = factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    factory::create_rating(db, item.id, users[1].id, 7.0).await?;
    factory::create_rating(db, item.id, users[2].id, 4.5).await?;

    let repo = ItemRatingRepository::new(db);
    let ratings = repo.get_for_party_rank_with_users(party_rank.id).await?;

    assert_eq!(ratings.len(), 2);
    for (rating, user) in &ratings {
        assert_eq!(rating.user_id, user.id);
        assert_eq!(rating.item_id, item.id);
    }
    assert_eq!(ratings[0].1.username, users[1].username);
    assert_eq!(ratings[1].1.username, users[2].username);

    Ok(())
}

/// Tests fetching ratings for a contest without any.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    let repo = ItemRatingRepository::new(db);
    let ratings = repo.get_for_party_rank_with_users(party_rank.id).await?;

    assert!(ratings.is_empty());

    Ok(())
}
