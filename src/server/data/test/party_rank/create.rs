use super::*;

/// Tests creating a new party rank.
///
/// Verifies that the repository creates the contest in registration status
/// with all provided settings and enrolls the creator as the first member.
///
/// Expected: Ok with party rank created and creator membership present
#[tokio::test]
async fn creates_party_rank_with_creator_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let deadline = Utc::now() + Duration::days(7);

    let repo = PartyRankRepository::new(db);
    let result = repo
        .create(CreatePartyRankParam {
            creator_id: creator.id,
            name: "Best 80s Synth Tracks".to_string(),
            description: Some("One track per person".to_string()),
            items_per_member: 2,
            allow_comments: true,
            show_authors_on_results: false,
            deadline_submissions: Some(deadline),
            deadline_ratings: None,
        })
        .await;

    assert!(result.is_ok());
    let party_rank = result.unwrap();
    assert_eq!(party_rank.creator_id, creator.id);
    assert_eq!(party_rank.name, "Best 80s Synth Tracks");
    assert_eq!(party_rank.status, PartyRankStatus::Registration);
    assert_eq!(party_rank.items_per_member, 2);
    assert_eq!(party_rank.deadline_submissions, Some(deadline));
    assert!(party_rank.finished_at.is_none());

    let membership = entity::prelude::PartyRankMember::find()
        .filter(entity::party_rank_member::Column::PartyRankId.eq(party_rank.id))
        .filter(entity::party_rank_member::Column::UserId.eq(creator.id))
        .one(db)
        .await?;
    assert!(membership.is_some());

    Ok(())
}

/// Tests foreign key constraint on creator_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PartyRankRepository::new(db);
    let result = repo
        .create(CreatePartyRankParam {
            creator_id: 999999,
            name: "Orphan Contest".to_string(),
            description: None,
            items_per_member: 1,
            allow_comments: true,
            show_authors_on_results: false,
            deadline_submissions: None,
            deadline_ratings: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
