use super::*;

/// Tests the rating deadline scan.
///
/// Creates one overdue rating contest, one still open, and one overdue
/// contest that already finished.
///
/// Expected: Ok with only the overdue rating contest
#[tokio::test]
async fn finds_only_overdue_rating_contests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let now = Utc::now();

    let overdue = factory::party_rank::PartyRankFactory::new(db, creator.id)
        .status("rating")
        .deadline_ratings(Some(now - Duration::minutes(5)))
        .build()
        .await?;
    factory::party_rank::PartyRankFactory::new(db, creator.id)
        .status("rating")
        .deadline_ratings(Some(now + Duration::hours(2)))
        .build()
        .await?;
    factory::party_rank::PartyRankFactory::new(db, creator.id)
        .status("finished")
        .deadline_ratings(Some(now - Duration::hours(1)))
        .finished_at(Some(now - Duration::hours(1)))
        .build()
        .await?;

    let repo = PartyRankRepository::new(db);
    let due = repo.find_due_ratings(now).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, overdue.id);

    Ok(())
}
