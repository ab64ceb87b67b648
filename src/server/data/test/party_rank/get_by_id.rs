use super::*;

/// Tests fetching a party rank by ID.
///
/// Expected: Ok(Some(party_rank)) with the stored status parsed
#[tokio::test]
async fn finds_existing_party_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let created = factory::party_rank::PartyRankFactory::new(db, creator.id)
        .status("rating")
        .build()
        .await?;

    let repo = PartyRankRepository::new(db);
    let found = repo.get_by_id(created.id).await?;

    assert!(found.is_some());
    let party_rank = found.unwrap();
    assert_eq!(party_rank.id, created.id);
    assert_eq!(party_rank.status, PartyRankStatus::Rating);

    Ok(())
}

/// Tests lookup of a party rank that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PartyRankRepository::new(db);
    let found = repo.get_by_id(999999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a corrupt status string is surfaced as an error.
///
/// Expected: Err(DbErr::Custom) instead of a silently wrong status
#[tokio::test]
async fn rejects_unknown_status_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let created = factory::party_rank::PartyRankFactory::new(db, creator.id)
        .status("archived")
        .build()
        .await?;

    let repo = PartyRankRepository::new(db);
    let result = repo.get_by_id(created.id).await;

    assert!(result.is_err());

    Ok(())
}
