use super::*;

/// Tests deleting a party rank with members, items, and ratings.
///
/// Expected: Ok with the party rank and its dependent rows removed
#[tokio::test]
async fn deletes_party_rank_and_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    let item = factory::create_rank_item(db, party_rank.id, users[0].id).await?;
    factory::create_rating(db, item.id, users[1].id, 7.5).await?;

    let repo = PartyRankRepository::new(db);
    repo.delete(party_rank.id).await?;

    let remaining = entity::prelude::PartyRank::find_by_id(party_rank.id)
        .one(db)
        .await?;
    assert!(remaining.is_none());

    let members = entity::prelude::PartyRankMember::find()
        .filter(entity::party_rank_member::Column::PartyRankId.eq(party_rank.id))
        .all(db)
        .await?;
    assert!(members.is_empty());

    let items = entity::prelude::RankItem::find()
        .filter(entity::rank_item::Column::PartyRankId.eq(party_rank.id))
        .all(db)
        .await?;
    assert!(items.is_empty());

    let ratings = entity::prelude::ItemRating::find()
        .filter(entity::item_rating::Column::ItemId.eq(item.id))
        .all(db)
        .await?;
    assert!(ratings.is_empty());

    Ok(())
}

/// Tests deleting a party rank that does not exist.
///
/// Expected: Ok, deleting nothing
#[tokio::test]
async fn succeeds_for_unknown_party_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PartyRankRepository::new(db);
    repo.delete(999999).await?;

    Ok(())
}
