use super::*;

/// Tests enrolled member passes the member permission check.
///
/// Verifies that the AuthGuard grants access when the user holds a
/// membership entry for the party rank.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_member() -> Result<(), AppError> {
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
        .require(&[Permission::Member(party_rank.id)])
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, member.id);

    Ok(())
}

/// Tests non-member is denied the member permission.
///
/// Verifies that an authenticated user without a membership entry for
/// the party rank is denied access.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_creator, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;
    let outsider = factory::user::create_user(db).await?;

    session.insert(SESSION_AUTH_USER_ID, outsider.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::Member(party_rank.id)])
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, outsider.id);
            assert!(msg.contains("member"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests member check against a missing party rank.
///
/// Verifies that checking membership of a party rank that does not exist
/// reports not found instead of an access error.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_not_found_for_missing_party_rank() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Member(999999)]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::NotFound(msg) => {
            assert!(msg.contains("999999"));
        }
        e => panic!("Expected NotFound error, got: {:?}", e),
    }

    Ok(())
}
