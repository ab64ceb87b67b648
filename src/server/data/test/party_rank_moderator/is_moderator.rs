use super::*;

/// Tests the moderator check for users with and without an entry.
///
/// Expected: Ok(true) for the granted user, Ok(false) otherwise
#[tokio::test]
async fn reports_moderator_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    factory::create_moderator(db, party_rank.id, users[1].id).await?;

    let repo = PartyRankModeratorRepository::new(db);

    assert!(repo.is_moderator(party_rank.id, users[1].id).await?);
    assert!(!repo.is_moderator(party_rank.id, users[0].id).await?);

    Ok(())
}
