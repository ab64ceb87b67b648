use super::*;

/// Tests the reminder window scan.
///
/// Creates a rating contest ending in 30 minutes, one ending in 3 hours, and
/// one whose deadline already passed.
///
/// Expected: Ok with only the contest ending inside the one hour window
#[tokio::test]
async fn finds_contests_ending_inside_the_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let now = Utc::now();

    let ending_soon = factory::party_rank::PartyRankFactory::new(db, creator.id)
        .status("rating")
        .deadline_ratings(Some(now + Duration::minutes(30)))
        .build()
        .await?;
    factory::party_rank::PartyRankFactory::new(db, creator.id)
        .status("rating")
        .deadline_ratings(Some(now + Duration::hours(3)))
        .build()
        .await?;
    factory::party_rank::PartyRankFactory::new(db, creator.id)
        .status("rating")
        .deadline_ratings(Some(now - Duration::minutes(5)))
        .build()
        .await?;

    let repo = PartyRankRepository::new(db);
    let ending = repo.find_rating_ending_within(now, Duration::hours(1)).await?;

    assert_eq!(ending.len(), 1);
    assert_eq!(ending[0].id, ending_soon.id);

    Ok(())
}
