use super::*;

/// Tests setting and clearing a member's favorite item.
///
/// Expected: Ok with the favorite stored, then cleared again
#[tokio::test]
async fn sets_and_clears_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    let item = factory::create_rank_item(db, party_rank.id, users[0].id).await?;

    let repo = PartyRankMemberRepository::new(db);

    let updated = repo
        .set_favorite(party_rank.id, users[1].id, Some(item.id))
        .await?;
    assert_eq!(updated.favorite_item_id, Some(item.id));

    let cleared = repo.set_favorite(party_rank.id, users[1].id, None).await?;
    assert!(cleared.favorite_item_id.is_none());

    Ok(())
}

/// Tests setting a favorite for a user who is not a member.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;
    let outsider = factory::create_user(db).await?;

    let repo = PartyRankMemberRepository::new(db);
    let result = repo.set_favorite(party_rank.id, outsider.id, None).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
