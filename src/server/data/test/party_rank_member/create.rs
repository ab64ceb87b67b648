use super::*;

/// Tests enrolling a user in a party rank.
///
/// Expected: Ok with a membership carrying no favorite yet
#[tokio::test]
async fn creates_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;
    let joiner = factory::create_user(db).await?;

    let repo = PartyRankMemberRepository::new(db);
    let membership = repo.create(party_rank.id, joiner.id).await?;

    assert_eq!(membership.party_rank_id, party_rank.id);
    assert_eq!(membership.user_id, joiner.id);
    assert!(membership.favorite_item_id.is_none());

    Ok(())
}

/// Tests enrolling a user in a party rank that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_nonexistent_party_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PartyRankMemberRepository::new(db);
    let result = repo.create(999999, user.id).await;

    assert!(result.is_err());

    Ok(())
}
