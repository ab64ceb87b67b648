use super::*;

/// Tests deleting an entry that has been rated.
///
/// Expected: Ok with the entry and its ratings removed
#[tokio::test]
async fn deletes_item_and_cascades_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    let item = factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    factory::create_rating(db, item.id, users[1].id, 8.0).await?;

    let repo = RankItemRepository::new(db);
    repo.delete(item.id).await?;

    assert!(repo.get_by_id(item.id).await?.is_none());

    let ratings = entity::prelude::ItemRating::find()
        .filter(entity::item_rating::Column::ItemId.eq(item.id))
        .all(db)
        .await?;
    assert!(ratings.is_empty());

    Ok(())
}
