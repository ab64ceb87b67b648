use super::*;

/// Tests rating an item for the first time.
///
/// Expected: Ok with the value stored
#[tokio::test]
async fn creates_new_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    let item = factory::create_rank_item(db, party_rank.id, users[0].id).await?;

    let repo = ItemRatingRepository::new(db);
    let rating = repo.upsert(item.id, users[1].id, 7.5).await?;

    assert_eq!(rating.item_id, item.id);
    assert_eq!(rating.user_id, users[1].id);
    assert_eq!(rating.value, 7.5);

    Ok(())
}

/// Tests re-rating an already rated item.
///
/// Expected: Ok with the value replaced in place, leaving a single row
#[tokio::test]
async fn replaces_existing_rating_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    let item = factory::create_rank_item(db, party_rank.id, users[0].id).await?;

    let repo = ItemRatingRepository::new(db);
    let first = repo.upsert(item.id, users[1].id, 4.0).await?;
    let second = repo.upsert(item.id, users[1].id, 9.5).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.value, 9.5);

    let rows = entity::prelude::ItemRating::find()
        .filter(entity::item_rating::Column::ItemId.eq(item.id))
        .filter(entity::item_rating::Column::UserId.eq(users[1].id))
        .count(db)
        .await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Tests that ratings from different users stay separate rows.
///
/// Expected: Ok with one row per rating user
#[tokio::test]
async fn keeps_ratings_separate_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 3).await?;
    let item = factory::create_rank_item(db, party_rank.id, users[0].id).await?;

    let repo = ItemRatingRepository::new(db);
    repo.upsert(item.id, users[1].id, 6.0).await?;
    repo.upsert(item.id, users[2].id, 8.5).await?;

    let rows = entity::prelude::ItemRating::find()
        .filter(entity::item_rating::Column::ItemId.eq(item.id))
        .count(db)
        .await?;
    assert_eq!(rows, 2);

    Ok(())
}
