use super::*;

/// Tests granting a moderator entry.
///
/// Expected: Ok with the entry linked to the party rank and user
#[tokio::test]
async fn creates_moderator_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;

    let repo = PartyRankModeratorRepository::new(db);
    let entry = repo.create(party_rank.id, users[1].id).await?;

    assert_eq!(entry.party_rank_id, party_rank.id);
    assert_eq!(entry.user_id, users[1].id);
    assert!(repo.is_moderator(party_rank.id, users[1].id).await?);

    Ok(())
}

/// Tests granting an entry for a party rank that does not exist.
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

    let repo = PartyRankModeratorRepository::new(db);
    let result = repo.create(999999, user.id).await;

    assert!(result.is_err());

    Ok(())
}
