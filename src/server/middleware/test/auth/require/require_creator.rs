use super::*;

/// Tests creator passes the creator permission check.
///
/// Verifies that the AuthGuard grants access when the user created
/// the party rank.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_creator() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (creator, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    session.insert(SESSION_AUTH_USER_ID, creator.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::Creator(party_rank.id)])
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, creator.id);

    Ok(())
}

/// Tests appointed moderator is denied the creator permission.
///
/// Verifies that holding a moderator entry does not satisfy the creator
/// requirement.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_moderator() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    let moderator = &users[1];
    factory::party_rank_moderator::create_moderator(db, party_rank.id, moderator.id).await?;

    session.insert(SESSION_AUTH_USER_ID, moderator.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::Creator(party_rank.id)])
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, moderator.id);
            assert!(msg.contains("creator"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
