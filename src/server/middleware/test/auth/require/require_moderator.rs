use super::*;

/// Tests creator passes the moderator permission check.
///
/// Verifies that the party rank creator satisfies the moderator
/// requirement without holding an explicit moderator entry.
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
        .require(&[Permission::Moderator(party_rank.id)])
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, creator.id);

    Ok(())
}

/// Tests appointed moderator passes the moderator permission check.
///
/// Verifies that a member holding a moderator entry satisfies the
/// moderator requirement.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_appointed_moderator() -> Result<(), AppError> {
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
        .require(&[Permission::Moderator(party_rank.id)])
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, moderator.id);

    Ok(())
}

/// Tests plain member is denied the moderator permission.
///
/// Verifies that a member without a moderator entry who is not the
/// creator is denied access.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_plain_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (party_rank, users) = factory::helpers::create_party_rank_with_members(db, 2).await?;
    let member = &users[1];

    session.insert(SESSION_AUTH_USER_ID, member.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::Moderator(party_rank.id)])
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, member.id);
            assert!(msg.contains("moderator"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
