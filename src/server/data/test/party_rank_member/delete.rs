use super::*;

/// Tests removing a membership.
///
/// Expected: Ok, and the membership is gone afterwards
#[tokio::test]
async fn deletes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;

    let repo = PartyRankMemberRepository::new(db);
    repo.delete(party_rank.id, users[1].id).await?;

    let membership = repo.find_membership(party_rank.id, users[1].id).await?;
    assert!(membership.is_none());

    let creator = repo.find_membership(party_rank.id, users[0].id).await?;
    assert!(creator.is_some());

    Ok(())
}

/// Tests removing a membership that does not exist.
///
/// Expected: Ok, deleting nothing
#[tokio::test]
async fn succeeds_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;
    let outsider = factory::create_user(db).await?;

    let repo = PartyRankMemberRepository::new(db);
    repo.delete(party_rank.id, outsider.id).await?;

    Ok(())
}
