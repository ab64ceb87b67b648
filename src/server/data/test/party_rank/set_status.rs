use super::*;

/// Tests a plain status transition.
///
/// Expected: Ok with the new status stored and finished_at untouched
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let created = factory::create_party_rank(db, creator.id).await?;

    let repo = PartyRankRepository::new(db);
    let updated = repo
        .set_status(created.id, PartyRankStatus::Ongoing, None)
        .await?;

    assert_eq!(updated.status, PartyRankStatus::Ongoing);
    assert!(updated.finished_at.is_none());

    Ok(())
}

/// Tests the finishing transition.
///
/// Expected: Ok with status finished and finished_at stamped
#[tokio::test]
async fn stamps_finished_at_when_finishing() -> Result<(), DbErr> {
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

    let finished_at = Utc::now();
    let repo = PartyRankRepository::new(db);
    let updated = repo
        .set_status(created.id, PartyRankStatus::Finished, Some(finished_at))
        .await?;

    assert_eq!(updated.status, PartyRankStatus::Finished);
    assert_eq!(updated.finished_at, Some(finished_at));

    Ok(())
}

/// Tests transitioning a party rank that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_party_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PartyRankRepository::new(db);
    let result = repo
        .set_status(999999, PartyRankStatus::Ongoing, None)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
