use super::*;

/// Tests the full-replace update of editable fields.
///
/// Verifies that every editable field takes the new value, including
/// clearing optional fields with None, while status is untouched.
///
/// Expected: Ok with all editable fields replaced
#[tokio::test]
async fn replaces_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let created = factory::party_rank::PartyRankFactory::new(db, creator.id)
        .description(Some("Old description".to_string()))
        .deadline_submissions(Some(Utc::now() + Duration::days(3)))
        .build()
        .await?;

    let new_deadline = Utc::now() + Duration::days(14);
    let repo = PartyRankRepository::new(db);
    let updated = repo
        .update(UpdatePartyRankParam {
            id: created.id,
            name: "Renamed Contest".to_string(),
            description: None,
            items_per_member: 3,
            allow_comments: false,
            show_authors_on_results: true,
            deadline_submissions: None,
            deadline_ratings: Some(new_deadline),
        })
        .await?;

    assert_eq!(updated.name, "Renamed Contest");
    assert!(updated.description.is_none());
    assert_eq!(updated.items_per_member, 3);
    assert!(!updated.allow_comments);
    assert!(updated.show_authors_on_results);
    assert!(updated.deadline_submissions.is_none());
    assert_eq!(updated.deadline_ratings, Some(new_deadline));
    assert_eq!(updated.status, PartyRankStatus::Registration);

    Ok(())
}

/// Tests updating a party rank that does not exist.
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
        .update(UpdatePartyRankParam {
            id: 999999,
            name: "Ghost".to_string(),
            description: None,
            items_per_member: 1,
            allow_comments: true,
            show_authors_on_results: false,
            deadline_submissions: None,
            deadline_ratings: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
