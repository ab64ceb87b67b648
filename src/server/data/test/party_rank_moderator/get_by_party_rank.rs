use super::*;

/// Tests listing the moderating users in grant order.
///
/// Expected: Ok with only the granted users, oldest grant first
#[tokio::test]
async fn lists_moderators_in_grant_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 3).await?;
    factory::create_moderator(db, party_rank.id, users[1].id).await?;
    factory::create_moderator(db, party_rank.id, users[2].id).await?;

    let repo = PartyRankModeratorRepository::new(db);
    let moderators = repo.get_by_party_rank(party_rank.id).await?;

    assert_eq!(moderators.len(), 2);
    assert_eq!(moderators[0].id, users[1].id);
    assert_eq!(moderators[1].id, users[2].id);

    Ok(())
}

/// Tests listing moderators when none were granted.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    let repo = PartyRankModeratorRepository::new(db);
    let moderators = repo.get_by_party_rank(party_rank.id).await?;

    assert!(moderators.is_empty());

    Ok(())
}
