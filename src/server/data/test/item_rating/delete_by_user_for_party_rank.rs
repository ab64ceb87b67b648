use super::*;

/// Tests removing one member's ratings across a contest.
///
/// Ratings by other members and on other contests must survive.
///
/// Expected: Ok(2) with the other rows untouched
#[tokio::test]
async fn deletes_only_the_members_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 3).await?;
    let first = factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    let second = factory::create_rank_item(db, party_rank.id, users[1].id).await?;
    factory::create_rating(db, first.id, users[2].id, 2.5).await?;
    factory::create_rating(db, second.id, users[2].id, 7.0).await?;
    factory::create_rating(db, first.id, users[1].id, 9.5).await?;

    let (other_creator, other) = factory::helpers::create_party_rank_with_creator(db).await?;
    let other_item = factory::create_rank_item(db, other.id, other_creator.id).await?;
    factory::create_rating(db, other_item.id, users[2].id, 10.0).await?;

    let repo = ItemRatingRepository::new(db);
    let removed = repo
        .delete_by_user_for_party_rank(party_rank.id, users[2].id)
        .await?;

    assert_eq!(removed, 2);
    assert_eq!(repo.count_rated_by_user(party_rank.id, users[2].id).await?, 0);
    assert_eq!(repo.count_rated_by_user(party_rank.id, users[1].id).await?, 1);
    assert_eq!(repo.count_rated_by_user(other.id, users[2].id).await?, 1);

    Ok(())
}

/// Tests removing ratings for a member who gave none.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    let repo = ItemRatingRepository::new(db);
    let removed = repo
        .delete_by_user_for_party_rank(party_rank.id, creator.id)
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}
