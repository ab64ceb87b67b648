use super::*;

/// Tests the submission deadline scan.
///
/// Creates one overdue registration contest, one still open, one without a
/// deadline, and one overdue but already ongoing.
///
/// Expected: Ok with only the overdue registration contest
#[tokio::test]
async fn finds_only_overdue_registration_contests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let now = Utc::now();

    let overdue = factory::party_rank::PartyRankFactory::new(db, creator.id)
        .deadline_submissions(Some(now - Duration::minutes(5)))
        .build()
        .await?;
    factory::party_rank::PartyRankFactory::new(db, creator.id)
        .deadline_submissions(Some(now + Duration::hours(2)))
        .build()
        .await?;
    factory::create_party_rank(db, creator.id).await?;
    factory::party_rank::PartyRankFactory::new(db, creator.id)
        .status("ongoing")
        .deadline_submissions(Some(now - Duration::minutes(5)))
        .build()
        .await?;

    let repo = PartyRankRepository::new(db);
    let due = repo.find_due_submissions(now).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, overdue.id);

    Ok(())
}
