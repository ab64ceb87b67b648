use super::*;

/// Tests looking up an existing membership.
///
/// Expected: Ok(Some) with the matching membership
#[tokio::test]
async fn finds_existing_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    let repo = PartyRankMemberRepository::new(db);
    let membership = repo.find_membership(party_rank.id, creator.id).await?;

    let membership = membership.expect("creator should be a member");
    assert_eq!(membership.party_rank_id, party_rank.id);
    assert_eq!(membership.user_id, creator.id);
    assert!(membership.favorite_item_id.is_none());

    Ok(())
}

/// Tests looking up a user who never joined.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;
    let outsider = factory::create_user(db).await?;

    let repo = PartyRankMemberRepository::new(db);
    let membership = repo.find_membership(party_rank.id, outsider.id).await?;

    assert!(membership.is_none());

    Ok(())
}
