use super::*;

mod require_creator;
mod require_member;
mod require_moderator;

/// Tests multiple permissions are all checked.
///
/// Verifies that when multiple permissions are required, all of them
/// must be satisfied for access to be granted. The creator satisfies
/// member, moderator, and creator checks at once.
///
/// Expected: Ok(User) when all permissions are met
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
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
        .require(&[
            Permission::Member(party_rank.id),
            Permission::Moderator(party_rank.id),
            Permission::Creator(party_rank.id),
        ])
        .await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, creator.id);
    assert_eq!(returned_user.username, creator.username);

    Ok(())
}

/// Tests that if any permission fails, the whole check fails.
///
/// Verifies that when checking multiple permissions, if the user lacks
/// any one of them, access is denied. A plain member passes the member
/// check but fails the creator check.
///
/// Expected: Err(AuthError::AccessDenied) for the failed permission
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
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
        .require(&[
            Permission::Member(party_rank.id),
            Permission::Creator(party_rank.id),
        ])
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, member.id);
            assert!(msg.contains("creator"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// user with a valid database record is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.username, user.username);

    Ok(())
}

/// Tests unauthenticated user is denied access.
///
/// Verifies that the AuthGuard denies access when there is no user ID
/// in the session (user not logged in).
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInSession) => {}
        e => panic!("Expected UserNotInSession error, got: {:?}", e),
    }

    Ok(())
}

/// Tests user in session but not in database is denied.
///
/// Verifies that the AuthGuard denies access when the user ID exists in
/// the session but the user record does not exist in the database.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    session.insert(SESSION_AUTH_USER_ID, 999999).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(user_id)) => {
            assert_eq!(user_id, 999999);
        }
        e => panic!("Expected UserNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}
