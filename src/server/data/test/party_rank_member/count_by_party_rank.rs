use super::*;

/// Tests counting members across two contests.
///
/// Expected: Ok with each contest counting only its own members
#[tokio::test]
async fn counts_members_per_party_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_party_rank_with_members(db, 3).await?;
    let (second, _) = factory::helpers::create_party_rank_with_members(db, 1).await?;

    let repo = PartyRankMemberRepository::new(db);

    assert_eq!(repo.count_by_party_rank(first.id).await?, 3);
    assert_eq!(repo.count_by_party_rank(second.id).await?, 1);
    assert_eq!(repo.count_by_party_rank(999999).await?, 0);

    Ok(())
}
