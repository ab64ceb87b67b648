use super::*;

/// Tests listing members with their user rows.
///
/// Expected: Ok with every member paired with its user, in join order
#[tokio::test]
async fn lists_members_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 3).await?;

    let repo = PartyRankMemberRepository::new(db);
    let members = repo.get_by_party_rank(party_rank.id).await?;

    assert_eq!(members.len(), 3);
    for (index, (membership, user)) in members.iter().enumerate() {
        assert_eq!(membership.party_rank_id, party_rank.id);
        assert_eq!(membership.user_id, user.id);
        assert_eq!(user.id, users[index].id);
        assert_eq!(user.username, users[index].username);
    }

    Ok(())
}

/// Tests listing members of a party rank with no memberships.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_unknown_party_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PartyRankMemberRepository::new(db);
    let members = repo.get_by_party_rank(999999).await?;

    assert!(members.is_empty());

    Ok(())
}
